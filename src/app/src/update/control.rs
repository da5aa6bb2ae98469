use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::api_post;
use crate::error::ValidationError;
use crate::events::{ControlEvent, Event};
use crate::http_helpers::{CONTROL_ENDPOINT, REQUEST_VERIFICATION_ENDPOINT};
use crate::model::Model;
use crate::types::{
    sanitize_code_input, ControlRequest, ControlWorkflowState, PowerAction, Severity,
    VerificationCode, VerificationRequest,
};
use crate::update_field;
use crate::Effect;

use super::{show_toast, status::schedule_refetch};

/// Handle the verification-gated control workflow
///
/// `Idle -> AwaitingCode -> Submitting -> Idle`, with a failed submission
/// falling back to `AwaitingCode` and any close discarding the action.
pub fn handle(event: ControlEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ControlEvent::RequestControl { action } => request_control(&action, model),

        ControlEvent::RequestControlResponse(result) => {
            // restores the invoking control, whatever the outcome
            let Some(action) = model.pending_request.take() else {
                log::warn!("verification reply without a pending request");
                return Command::done();
            };
            let labels = model.labels();

            match result {
                Ok(reply) => {
                    log::info!("verification code requested for {action}");
                    model.workflow = ControlWorkflowState::AwaitingCode { action };
                    model.code_input.clear();
                    model.request_code_focus();
                    let message = reply
                        .message
                        .unwrap_or_else(|| labels.verification_sent.to_string());
                    show_toast(model, message, Severity::Success)
                }
                Err(e) => {
                    log::warn!("verification request for {action} failed: {e}");
                    let message = e.user_message(labels, labels.request_failed);
                    show_toast(model, message, Severity::Error)
                }
            }
        }

        ControlEvent::CodeInput { value } => {
            update_field!(model.code_input, sanitize_code_input(&value))
        }

        ControlEvent::SubmitVerification { code } => submit_verification(&code, model),

        ControlEvent::SubmitResponse(result) => {
            let labels = model.labels();

            match result {
                Ok(reply) => {
                    log::info!("control command accepted");
                    model.close_modal();
                    let message = reply
                        .message
                        .unwrap_or_else(|| labels.control_sent.to_string());
                    let toast = show_toast(model, message, Severity::Success);
                    Command::all([toast, schedule_refetch(model)])
                }
                Err(e) => {
                    log::warn!("control submission failed: {e}");
                    // a modal closed meanwhile stays closed
                    if let ControlWorkflowState::Submitting { action, .. } = model.workflow {
                        model.workflow = ControlWorkflowState::AwaitingCode { action };
                    }
                    model.code_input.clear();
                    model.request_code_focus();
                    let message = e.user_message(labels, labels.verify_failed);
                    show_toast(model, message, Severity::Error)
                }
            }
        }

        ControlEvent::CloseModal | ControlEvent::BackdropClicked => {
            if !model.modal_open() {
                return Command::done();
            }
            log::debug!("verification modal closed, discarding pending action");
            model.close_modal();
            render()
        }
    }
}

fn reject(error: ValidationError, model: &mut Model) -> Command<Effect, Event> {
    log::debug!("rejected locally: {error}");
    let message = model.labels().validation(&error);
    show_toast(model, message, Severity::Error)
}

fn request_control(action: &str, model: &mut Model) -> Command<Effect, Event> {
    let action = match action.parse::<PowerAction>() {
        Ok(action) => action,
        Err(e) => return reject(e, model),
    };

    if !model.device_online() {
        return reject(ValidationError::DeviceOffline, model);
    }

    // one workflow at a time
    if model.pending_request.is_some() || model.modal_open() {
        return reject(ValidationError::Busy, model);
    }

    model.pending_request = Some(action);
    let request = VerificationRequest { action };
    api_post!(Control, ControlEvent, REQUEST_VERIFICATION_ENDPOINT, RequestControlResponse, "Request verification",
        body_json: &request
    )
}

fn submit_verification(code: &str, model: &mut Model) -> Command<Effect, Event> {
    if model.workflow.is_submitting() {
        log::debug!("submission already in flight");
        return Command::done();
    }

    let code = match VerificationCode::parse(code) {
        Ok(code) => code,
        Err(e) => return reject(e, model),
    };

    let ControlWorkflowState::AwaitingCode { action } = model.workflow else {
        model.close_modal();
        return reject(ValidationError::ActionExpired, model);
    };

    let request = ControlRequest {
        action,
        code: code.as_str().to_string(),
    };
    if let Err(e) = request.validate() {
        log::error!("control request failed validation: {e}");
        return reject(ValidationError::MalformedCode, model);
    }
    model.workflow = ControlWorkflowState::Submitting { action, code };
    api_post!(Control, ControlEvent, CONTROL_ENDPOINT, SubmitResponse, "Control",
        body_json: &request
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::types::{ApiReply, DeviceStatus};

    fn awaiting(action: PowerAction) -> Model {
        Model {
            workflow: ControlWorkflowState::AwaitingCode { action },
            ..Default::default()
        }
    }

    fn toast_message(model: &Model) -> Option<&str> {
        model.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn request_marks_control_busy() {
        let mut model = Model::default();

        let _ = handle(
            ControlEvent::RequestControl {
                action: "off".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.pending_request, Some(PowerAction::Off));
        assert_eq!(model.workflow, ControlWorkflowState::Idle);
    }

    #[test]
    fn invalid_action_is_rejected_locally() {
        let mut model = Model::default();

        let _ = handle(
            ControlEvent::RequestControl {
                action: "bogus".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.pending_request, None);
        assert_eq!(model.workflow, ControlWorkflowState::Idle);
        assert_eq!(toast_message(&model), Some("无效的操作"));
    }

    #[test]
    fn offline_device_rejects_request() {
        let mut model = Model {
            status: Some(DeviceStatus::default()),
            ..Default::default()
        };

        let _ = handle(
            ControlEvent::RequestControl {
                action: "on".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.pending_request, None);
        assert_eq!(toast_message(&model), Some("设备离线，无法控制"));
    }

    #[test]
    fn second_request_while_awaiting_code_is_rejected() {
        let mut model = awaiting(PowerAction::On);

        let _ = handle(
            ControlEvent::RequestControl {
                action: "off".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.pending_request, None);
        assert_eq!(
            model.workflow,
            ControlWorkflowState::AwaitingCode {
                action: PowerAction::On
            }
        );
        assert_eq!(toast_message(&model), Some("操作进行中，请稍候"));
    }

    #[test]
    fn request_while_verification_request_in_flight_is_busy() {
        let mut model = Model {
            pending_request: Some(PowerAction::On),
            ..Default::default()
        };

        let mut cmd = handle(
            ControlEvent::RequestControl {
                action: "off".to_string(),
            },
            &mut model,
        );

        assert!(!cmd.effects().any(|e| matches!(e, Effect::Http(_))));
        assert_eq!(model.pending_request, Some(PowerAction::On));
        assert!(!model.modal_open());
        assert_eq!(toast_message(&model), Some("操作进行中，请稍候"));
    }

    #[test]
    fn acknowledged_request_opens_modal() {
        let mut model = Model {
            pending_request: Some(PowerAction::On),
            code_input: "99".to_string(),
            ..Default::default()
        };

        let _ = handle(
            ControlEvent::RequestControlResponse(Ok(ApiReply {
                success: true,
                message: Some("sent".to_string()),
                device_offline: false,
            })),
            &mut model,
        );

        assert_eq!(model.pending_request, None);
        assert_eq!(
            model.workflow,
            ControlWorkflowState::AwaitingCode {
                action: PowerAction::On
            }
        );
        assert!(model.code_input.is_empty());
        assert_eq!(model.focus_code_input, 1);
        assert_eq!(toast_message(&model), Some("sent"));
    }

    #[test]
    fn failed_request_restores_control_without_modal() {
        for result in [
            Err(ClientError::Rejected { message: None }),
            Err(ClientError::transport("Request verification", "reset")),
        ] {
            let mut model = Model {
                pending_request: Some(PowerAction::Off),
                ..Default::default()
            };

            let _ = handle(ControlEvent::RequestControlResponse(result), &mut model);

            assert_eq!(model.pending_request, None);
            assert!(!model.modal_open());
            assert_eq!(
                model.toast.as_ref().map(|t| t.severity),
                Some(Severity::Error)
            );
        }
    }

    #[test]
    fn code_input_is_normalized() {
        let mut model = awaiting(PowerAction::On);

        let _ = handle(
            ControlEvent::CodeInput {
                value: "1a2b3c4d5e6f7".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.code_input, "123456");
    }

    #[test]
    fn malformed_code_stays_awaiting() {
        let mut model = awaiting(PowerAction::On);

        let _ = handle(
            ControlEvent::SubmitVerification {
                code: "12345".to_string(),
            },
            &mut model,
        );

        assert_eq!(
            model.workflow,
            ControlWorkflowState::AwaitingCode {
                action: PowerAction::On
            }
        );
        assert_eq!(toast_message(&model), Some("验证码必须是6位数字"));
    }

    #[test]
    fn empty_code_asks_for_input() {
        let mut model = awaiting(PowerAction::Off);

        let _ = handle(
            ControlEvent::SubmitVerification {
                code: " ".to_string(),
            },
            &mut model,
        );

        assert!(model.modal_open());
        assert_eq!(toast_message(&model), Some("请输入验证码"));
    }

    #[test]
    fn valid_code_moves_to_submitting() {
        let mut model = awaiting(PowerAction::Off);

        let _ = handle(
            ControlEvent::SubmitVerification {
                code: "123456".to_string(),
            },
            &mut model,
        );

        assert!(model.workflow.is_submitting());
        assert_eq!(model.workflow.action(), Some(PowerAction::Off));
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let submitting = ControlWorkflowState::Submitting {
            action: PowerAction::On,
            code: VerificationCode::parse("123456").unwrap(),
        };
        let mut model = Model {
            workflow: submitting.clone(),
            ..Default::default()
        };

        let mut cmd = handle(
            ControlEvent::SubmitVerification {
                code: "654321".to_string(),
            },
            &mut model,
        );

        assert!(cmd.effects().next().is_none());
        assert_eq!(model.workflow, submitting);
        assert!(model.toast.is_none());
    }

    #[test]
    fn submit_without_pending_action_expires() {
        let mut model = Model::default();

        let _ = handle(
            ControlEvent::SubmitVerification {
                code: "123456".to_string(),
            },
            &mut model,
        );

        assert!(!model.modal_open());
        assert_eq!(toast_message(&model), Some("操作已过期，请重新操作"));
    }

    #[test]
    fn rejected_submission_returns_to_awaiting_code() {
        let mut model = Model {
            workflow: ControlWorkflowState::Submitting {
                action: PowerAction::On,
                code: VerificationCode::parse("123456").unwrap(),
            },
            code_input: "123456".to_string(),
            ..Default::default()
        };

        let _ = handle(
            ControlEvent::SubmitResponse(Err(ClientError::Rejected {
                message: Some("wrong code".to_string()),
            })),
            &mut model,
        );

        assert_eq!(
            model.workflow,
            ControlWorkflowState::AwaitingCode {
                action: PowerAction::On
            }
        );
        assert!(model.code_input.is_empty());
        assert_eq!(model.focus_code_input, 1);
        assert_eq!(toast_message(&model), Some("wrong code"));
    }

    #[test]
    fn accepted_submission_closes_modal() {
        let mut model = Model {
            workflow: ControlWorkflowState::Submitting {
                action: PowerAction::On,
                code: VerificationCode::parse("123456").unwrap(),
            },
            ..Default::default()
        };

        let _ = handle(
            ControlEvent::SubmitResponse(Ok(ApiReply {
                success: true,
                ..Default::default()
            })),
            &mut model,
        );

        assert!(!model.modal_open());
        assert_eq!(toast_message(&model), Some("指令已发送"));
        assert_eq!(
            model.toast.as_ref().map(|t| t.severity),
            Some(Severity::Success)
        );
    }

    #[test]
    fn close_discards_pending_action() {
        for event in [ControlEvent::CloseModal, ControlEvent::BackdropClicked] {
            let mut model = awaiting(PowerAction::Off);
            model.code_input = "12".to_string();

            let _ = handle(event, &mut model);

            assert_eq!(model.workflow, ControlWorkflowState::Idle);
            assert!(model.code_input.is_empty());
        }
    }
}
