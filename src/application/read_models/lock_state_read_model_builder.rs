//! Builder for constructing LockStateReadModel from a render response

use super::lock_state_read_model::{
    ComponentLineView, LockStateReadModel, ReportMetadataView, VerificationView,
};
use crate::application::dto::RenderResponse;
use crate::lock_state::services::VerificationResult;
use chrono::{SecondsFormat, Utc};

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct LockStateReadModelBuilder;

impl LockStateReadModelBuilder {
    /// Builds the read model stamped with the current UTC time
    pub fn build(response: &RenderResponse) -> LockStateReadModel {
        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::build_at(response, generated_at)
    }

    /// Builds the read model with an explicit timestamp
    pub fn build_at(response: &RenderResponse, generated_at: String) -> LockStateReadModel {
        let components = response
            .lines
            .iter()
            .map(|line| ComponentLineView {
                component: line.component().to_string(),
                constraints: line.constraints().to_vec(),
                line: line.to_string(),
            })
            .collect();

        LockStateReadModel {
            metadata: ReportMetadataView {
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
                generated_at,
            },
            components,
            verification: response.verification.as_ref().map(Self::build_verification),
        }
    }

    fn build_verification(result: &VerificationResult) -> VerificationView {
        VerificationView {
            up_to_date: result.is_up_to_date(),
            missing: result.missing.clone(),
            unexpected: result.unexpected.clone(),
            out_of_order: result.out_of_order,
        }
    }
}
