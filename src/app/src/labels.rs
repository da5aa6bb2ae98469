//! User-facing texts of the panel, one table per locale.

use crate::error::ValidationError;
use crate::types::PowerAction;

#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    // Connection indicator
    pub connected: &'static str,
    pub disconnected: &'static str,

    // Status display
    pub power_on: &'static str,
    pub power_off: &'static str,
    pub power_unknown: &'static str,
    pub device_offline: &'static str,
    pub signal_detecting: &'static str,
    pub never_updated: &'static str,

    // Controls
    pub button_on: &'static str,
    pub button_off: &'static str,
    pub button_refresh: &'static str,
    pub button_submit: &'static str,
    pub busy_processing: &'static str,
    pub busy_refreshing: &'static str,
    pub busy_verifying: &'static str,
    pub control_offline_tooltip: &'static str,

    // Verification workflow
    pub modal_prompt_on: &'static str,
    pub modal_prompt_off: &'static str,
    pub verification_sent: &'static str,
    pub request_failed: &'static str,
    pub control_busy: &'static str,
    pub control_sent: &'static str,
    pub verify_failed: &'static str,
    pub invalid_action: &'static str,
    pub code_required: &'static str,
    pub code_format: &'static str,
    pub action_expired: &'static str,

    // Status synchronisation
    pub refresh_started: &'static str,
    pub refresh_failed: &'static str,
    pub fetch_failed: &'static str,

    // Transport
    pub network_error: &'static str,
    pub network_online: &'static str,
    pub network_offline: &'static str,

    /// `chrono` format string of the header clock
    pub clock_format: &'static str,
}

impl Labels {
    pub fn modal_prompt(&self, action: PowerAction) -> &'static str {
        match action {
            PowerAction::On => self.modal_prompt_on,
            PowerAction::Off => self.modal_prompt_off,
        }
    }

    pub fn validation(&self, error: &ValidationError) -> &'static str {
        match error {
            ValidationError::InvalidAction(_) => self.invalid_action,
            ValidationError::EmptyCode => self.code_required,
            ValidationError::MalformedCode => self.code_format,
            ValidationError::ActionExpired => self.action_expired,
            ValidationError::DeviceOffline => self.control_offline_tooltip,
            ValidationError::Busy => self.control_busy,
        }
    }
}

pub static ZH_CN: Labels = Labels {
    connected: "已连接",
    disconnected: "连接断开",

    power_on: "开启",
    power_off: "关闭",
    power_unknown: "未知",
    device_offline: "设备离线",
    signal_detecting: "检测中...",
    never_updated: "--",

    button_on: "开启插座",
    button_off: "关闭插座",
    button_refresh: "刷新状态",
    button_submit: "确认",
    busy_processing: "处理中...",
    busy_refreshing: "刷新中...",
    busy_verifying: "验证中...",
    control_offline_tooltip: "设备离线，无法控制",

    modal_prompt_on: "验证码已发送到钉钉群，请输入验证码来开启插座:",
    modal_prompt_off: "验证码已发送到钉钉群，请输入验证码来关闭插座:",
    verification_sent: "验证码已发送",
    request_failed: "请求失败",
    control_busy: "操作进行中，请稍候",
    control_sent: "指令已发送",
    verify_failed: "验证失败",
    invalid_action: "无效的操作",
    code_required: "请输入验证码",
    code_format: "验证码必须是6位数字",
    action_expired: "操作已过期，请重新操作",

    refresh_started: "状态刷新中...",
    refresh_failed: "刷新失败",
    fetch_failed: "获取状态失败",

    network_error: "网络错误，请稍后重试",
    network_online: "网络已连接",
    network_offline: "网络连接断开",

    clock_format: "%Y/%m/%d %H:%M:%S",
};

pub static EN: Labels = Labels {
    connected: "Connected",
    disconnected: "Disconnected",

    power_on: "On",
    power_off: "Off",
    power_unknown: "Unknown",
    device_offline: "Device offline",
    signal_detecting: "Detecting...",
    never_updated: "--",

    button_on: "Turn on",
    button_off: "Turn off",
    button_refresh: "Refresh",
    button_submit: "Confirm",
    busy_processing: "Processing...",
    busy_refreshing: "Refreshing...",
    busy_verifying: "Verifying...",
    control_offline_tooltip: "Device offline, control unavailable",

    modal_prompt_on: "A verification code has been sent. Enter it to turn the plug on:",
    modal_prompt_off: "A verification code has been sent. Enter it to turn the plug off:",
    verification_sent: "Verification code sent",
    request_failed: "Request failed",
    control_busy: "Another operation is in progress",
    control_sent: "Command sent",
    verify_failed: "Verification failed",
    invalid_action: "Invalid operation",
    code_required: "Please enter the verification code",
    code_format: "The verification code must be 6 digits",
    action_expired: "The operation has expired, please start again",

    refresh_started: "Refreshing status...",
    refresh_failed: "Refresh failed",
    fetch_failed: "Failed to fetch status",

    network_error: "Network error, please try again later",
    network_online: "Network connected",
    network_offline: "Network disconnected",

    clock_format: "%m/%d/%Y, %H:%M:%S",
};
