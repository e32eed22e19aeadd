pub mod domain;
mod services;

pub use domain::{
    classify_error, CommandAction, CommandRequest, CommandResponse, CommandStatus, ResponseMeta,
};

use domain::CommandOutcome;
use locator_search::SearchEngine;
use services::Services;
use std::time::Instant;

pub struct CommandHandler {
    services: Services,
}

impl CommandHandler {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            services: Services::new(engine),
        }
    }

    pub fn execute(&self, request: CommandRequest) -> CommandResponse {
        let started = Instant::now();
        let CommandRequest { action, payload } = request;
        log::debug!("Executing command action {}", action.as_str());

        let outcome: anyhow::Result<CommandOutcome> = self.services.route(action, payload);
        match outcome {
            Ok(mut outcome) => {
                outcome.meta.duration_ms = Some(elapsed_ms(started));
                CommandResponse {
                    status: CommandStatus::Ok,
                    error: None,
                    data: outcome.data,
                    meta: outcome.meta,
                }
            }
            Err(err) => error_response(err, Some(action), elapsed_ms(started)),
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

pub fn error_response(
    err: anyhow::Error,
    action: Option<CommandAction>,
    duration_ms: u64,
) -> CommandResponse {
    let message = format!("{err:#}");
    log::warn!("Command failed: {message}");
    CommandResponse {
        status: CommandStatus::Error,
        error: Some(classify_error(&message, action)),
        data: serde_json::Value::Null,
        meta: ResponseMeta {
            duration_ms: Some(duration_ms),
            ..Default::default()
        },
    }
}

pub fn execute(request: CommandRequest, engine: SearchEngine) -> CommandResponse {
    CommandHandler::new(engine).execute(request)
}
