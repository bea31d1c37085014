// 日誌工具

/// 初始化 env_logger：debug 模式輸出 Debug 層級，否則只輸出 Error
pub fn init_logger(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
