//! JSON schemas for the shapes external producers hand to the pipeline.

use crate::{ProjectManifest, SearchExecutionResult, SearchPlan};
use anyhow::{anyhow, Result};
use schemars::schema_for;
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Manifest,
    Plan,
    Result,
}

impl FromStr for SchemaKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "manifest" => Ok(SchemaKind::Manifest),
            "plan" | "search_plan" => Ok(SchemaKind::Plan),
            "result" | "search_result" => Ok(SchemaKind::Result),
            other => Err(anyhow!(
                "unknown schema '{other}' (expected manifest|plan|result)"
            )),
        }
    }
}

pub fn json_schema(kind: SchemaKind) -> Result<Value> {
    let schema = match kind {
        SchemaKind::Manifest => schema_for!(ProjectManifest),
        SchemaKind::Plan => schema_for!(SearchPlan),
        SchemaKind::Result => schema_for!(SearchExecutionResult),
    };
    serde_json::to_value(&schema).map_err(Into::into)
}
