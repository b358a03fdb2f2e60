use crate::cli::parser::Commands;
use crate::cli::request::build_request;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        request,
    } = cmd
    {
        let req = build_request(request, cfg)?;
        let report = Core::build_plan(&req, cfg.projection_options())?;
        ExportLogic::export(&report, format, file, *force)?;
    }
    Ok(())
}
