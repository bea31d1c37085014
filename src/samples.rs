//! 程式碼範例註冊表
//!
//! 文件頁分頁顯示的固定範例內容。標籤與程式碼是面向使用者的文案，
//! 修改它們等於修改文件內容本身，不屬於可重構的行為

use serde::Serialize;

/// 單一程式碼範例分頁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    /// 分頁標籤
    pub label: &'static str,
    /// 語言 ID（用於選擇語法）
    pub lang: &'static str,
    /// 程式碼內容
    pub code: &'static str,
}

/// 固定順序的範例清單
///
/// ⚠️ 每個 lang 都必須在高亮器的支援語言集合內
pub const CODE_SAMPLES: &[CodeSample] = &[
    CodeSample {
        label: "Laravel",
        lang: "php",
        code: r#"use Illuminate\Support\Facades\Mail;

Mail::lettr()
    ->to('user@example.com')
    ->sendTemplate('welcome-email', [
        'name' => 'John',
        'company' => 'Acme Inc',
    ]);"#,
    },
    CodeSample {
        label: "PHP",
        lang: "php",
        code: r#"use Lettr\Lettr;

$lettr = new Lettr(getenv('LETTR_API_KEY'));

$lettr->sendTemplate('welcome-email', [
    'to' => 'user@example.com',
    'name' => 'John',
    'company' => 'Acme Inc',
]);"#,
    },
    CodeSample {
        label: "Node.js",
        lang: "javascript",
        code: r#"import { Lettr } from '@lettr/node';

const lettr = new Lettr(process.env.LETTR_API_KEY);

await lettr.sendTemplate('welcome-email', {
  to: 'user@example.com',
  name: 'John',
  company: 'Acme Inc',
});"#,
    },
    CodeSample {
        label: "Python",
        lang: "python",
        code: r#"import lettr

client = lettr.Client(api_key="your_api_key")

client.send_template("welcome-email", {
    "to": "user@example.com",
    "name": "John",
    "company": "Acme Inc",
})"#,
    },
    CodeSample {
        label: "Go",
        lang: "go",
        code: r#"package main

import "github.com/lettr/lettr-go"

func main() {
    client := lettr.NewClient("your_api_key")

    client.SendTemplate("welcome-email", &lettr.Params{
        To:      "user@example.com",
        Name:    "John",
        Company: "Acme Inc",
    })
}"#,
    },
    CodeSample {
        label: "Ruby",
        lang: "ruby",
        code: r#"require 'lettr'

client = Lettr::Client.new(api_key: 'your_api_key')

client.send_template('welcome-email',
  to: 'user@example.com',
  name: 'John',
  company: 'Acme Inc'
)"#,
    },
    CodeSample {
        label: "cURL",
        lang: "bash",
        code: r#"curl -X POST https://api.lettr.dev/v1/send \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "template": "welcome-email",
    "to": "user@example.com",
    "name": "John",
    "company": "Acme Inc"
  }'"#,
    },
];

/// 依標籤尋找範例（不分大小寫）
pub fn find(label: &str) -> Option<&'static CodeSample> {
    CODE_SAMPLES
        .iter()
        .find(|sample| sample.label.eq_ignore_ascii_case(label))
}
