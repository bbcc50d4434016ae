use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses the start-up banner.
    pub no_banner: bool,
    /// 0 prints everything, 1 skips portraits and headers, 2 prints only the summary.
    pub quiet: u8,
    /// Directory holding `background.jpg` and the `<kind>_<upgrade>.png` portraits.
    ///
    /// When absent no portrait is looked up and every slot renders as a placeholder.
    pub assets: Option<PathBuf>,
}
