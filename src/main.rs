use anyhow::Result;
use question_bank_import::config::CONFIG_FILE;
use question_bank_import::utils::logging;
use question_bank_import::{App, Config, Taxonomy};
use std::path::Path;

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load_or_default(Path::new(CONFIG_FILE))?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config, Taxonomy::default())?.run()?;

    Ok(())
}
