use cgpa_common::config::Config;

use crate::terminal::print;

pub fn grades(cfg: &Config) -> anyhow::Result<()> {
    print::grade_reference();
    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}
