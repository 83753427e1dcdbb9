//! Boundary with the host application.
//!
//! Inbound, the host calls methods by name with a JSON argument map
//! (`MethodCall`). Outbound, title bar events go to a `HostBridge`. The
//! transport in between belongs to the host.

mod args;

use crate::config::SharedConfig;
use crate::platform::InputControl;
use crate::title_bar::TitleBarEvent;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub use args::int_arg;

/// Receives title bar events. Called after the window's state is settled, so
/// implementations may query the title bar.
pub trait HostBridge {
    fn emit(&self, event: &TitleBarEvent);
}

impl<F: Fn(&TitleBarEvent)> HostBridge for F {
    fn emit(&self, event: &TitleBarEvent) {
        self(event)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MethodError {
    #[error("{signature} arguments is null")]
    MissingArgument { signature: &'static str },
    #[error("method `{0}` is not implemented")]
    NotImplemented(String),
}

impl MethodError {
    pub fn code(&self) -> &'static str {
        match self {
            MethodError::MissingArgument { .. } => "missing_argument",
            MethodError::NotImplemented(_) => "not_implemented",
        }
    }
}

pub struct TitleBarPlugin {
    config: SharedConfig,
    input: Box<dyn InputControl>,
}

impl TitleBarPlugin {
    pub fn new(config: SharedConfig, input: Box<dyn InputControl>) -> Self {
        Self { config, input }
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn handle_method_call(&self, call: &MethodCall) -> Result<Value, MethodError> {
        let result = self.dispatch(call);
        if let Err(err) = &result {
            crate::log_info!("[TitleBar] {} failed: {}", call.method, err);
        }
        result
    }

    fn dispatch(&self, call: &MethodCall) -> Result<Value, MethodError> {
        match call.method.as_str() {
            "releaseMouse" => {
                self.input.release_mouse();
                Ok(Value::Null)
            }
            "setWindowsTitleHeight" => {
                let height = int_arg(&call.arguments, "height").ok_or(
                    MethodError::MissingArgument {
                        signature: "setWindowsTitleHeight(int height)",
                    },
                )?;
                self.config.set_caption_height(height);
                crate::log_info!("[TitleBar] caption height set to {}", height);
                Ok(Value::Null)
            }
            "setWindowsTitleButtonWidth" => {
                let width = int_arg(&call.arguments, "width").ok_or(
                    MethodError::MissingArgument {
                        signature: "setWindowsTitleButtonWidth(int width)",
                    },
                )?;
                self.config.set_button_width(width);
                crate::log_info!("[TitleBar] button width set to {}", width);
                Ok(Value::Null)
            }
            "getWindowsTitleBarConfig" => {
                Ok(serde_json::to_value(self.config.get()).unwrap_or(Value::Null))
            }
            other => Err(MethodError::NotImplemented(other.to_string())),
        }
    }
}
