//! Usage log events delivered via the enterprise Pub/Sub topic.
//!
//! Each event carries exactly one payload, keyed by `eventType`; the payload
//! union follows the same repr-struct technique as [`crate::command`].

use crate::command::UnionError;
use crate::common::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Batched event logs collected from a device, sorted chronologically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUsageLogEvents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_log_events: Option<Vec<UsageLogEvent>>,
}

/// A single event logged on the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UsageLogEventRepr", into = "UsageLogEventRepr")]
pub struct UsageLogEvent {
    pub event_id: Option<String>,
    pub event_time: Option<DateTime<Utc>>,
    pub event_type: Option<EventType>,
    pub event: Option<UsageLogPayload>,
}

/// The per-type payload union of a usage log event.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageLogPayload {
    AdbShellCommand(AdbShellCommandEvent),
    AdbShellInteractive(AdbShellInteractiveEvent),
    AppProcessStart(AppProcessStartEvent),
    KeyguardDismissed(KeyguardDismissedEvent),
    KeyguardDismissAuthAttempt(KeyguardDismissAuthAttemptEvent),
    KeyguardSecured(KeyguardSecuredEvent),
    FilePulled(FilePulledEvent),
    FilePushed(FilePushedEvent),
    CertAuthorityInstalled(CertAuthorityInstalledEvent),
    CertAuthorityRemoved(CertAuthorityRemovedEvent),
    CertValidationFailure(CertValidationFailureEvent),
    CryptoSelfTestCompleted(CryptoSelfTestCompletedEvent),
    KeyDestruction(KeyDestructionEvent),
    KeyGenerated(KeyGeneratedEvent),
    KeyImport(KeyImportEvent),
    KeyIntegrityViolation(KeyIntegrityViolationEvent),
    LoggingStarted(LoggingStartedEvent),
    LoggingStopped(LoggingStoppedEvent),
    LogBufferSizeCritical(LogBufferSizeCriticalEvent),
    MediaMount(MediaMountEvent),
    MediaUnmount(MediaUnmountEvent),
    OsShutdown(OsShutdownEvent),
    OsStartup(OsStartupEvent),
    RemoteLock(RemoteLockEvent),
    WipeFailure(WipeFailureEvent),
    Connect(ConnectEvent),
    Dns(DnsEvent),
    StopLostModeUserAttempt(StopLostModeUserAttemptEvent),
    LostModeOutgoingPhoneCall(LostModeOutgoingPhoneCallEvent),
    LostModeLocation(LostModeLocationEvent),
    EnrollmentComplete(EnrollmentCompleteEvent),
    BackupServiceToggled(BackupServiceToggledEvent),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageLogEventRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adb_shell_command_event: Option<AdbShellCommandEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adb_shell_interactive_event: Option<AdbShellInteractiveEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_process_start_event: Option<AppProcessStartEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyguard_dismissed_event: Option<KeyguardDismissedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyguard_dismiss_auth_attempt_event: Option<KeyguardDismissAuthAttemptEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyguard_secured_event: Option<KeyguardSecuredEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_pulled_event: Option<FilePulledEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_pushed_event: Option<FilePushedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cert_authority_installed_event: Option<CertAuthorityInstalledEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cert_authority_removed_event: Option<CertAuthorityRemovedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cert_validation_failure_event: Option<CertValidationFailureEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crypto_self_test_completed_event: Option<CryptoSelfTestCompletedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_destruction_event: Option<KeyDestructionEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_generated_event: Option<KeyGeneratedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_import_event: Option<KeyImportEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_integrity_violation_event: Option<KeyIntegrityViolationEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logging_started_event: Option<LoggingStartedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logging_stopped_event: Option<LoggingStoppedEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_buffer_size_critical_event: Option<LogBufferSizeCriticalEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_mount_event: Option<MediaMountEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_unmount_event: Option<MediaUnmountEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_shutdown_event: Option<OsShutdownEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_startup_event: Option<OsStartupEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_lock_event: Option<RemoteLockEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wipe_failure_event: Option<WipeFailureEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connect_event: Option<ConnectEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns_event: Option<DnsEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_lost_mode_user_attempt_event: Option<StopLostModeUserAttemptEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lost_mode_outgoing_phone_call_event: Option<LostModeOutgoingPhoneCallEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lost_mode_location_event: Option<LostModeLocationEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enrollment_complete_event: Option<EnrollmentCompleteEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backup_service_toggled_event: Option<BackupServiceToggledEvent>,
}

impl TryFrom<UsageLogEventRepr> for UsageLogEvent {
    type Error = UnionError;

    fn try_from(repr: UsageLogEventRepr) -> Result<Self, UnionError> {
        let mut payloads: Vec<UsageLogPayload> = Vec::new();

        macro_rules! collect {
            ($($field:ident => $variant:ident),+ $(,)?) => {
                $(if let Some(value) = repr.$field {
                    payloads.push(UsageLogPayload::$variant(value));
                })+
            };
        }

        collect! {
            adb_shell_command_event => AdbShellCommand,
            adb_shell_interactive_event => AdbShellInteractive,
            app_process_start_event => AppProcessStart,
            keyguard_dismissed_event => KeyguardDismissed,
            keyguard_dismiss_auth_attempt_event => KeyguardDismissAuthAttempt,
            keyguard_secured_event => KeyguardSecured,
            file_pulled_event => FilePulled,
            file_pushed_event => FilePushed,
            cert_authority_installed_event => CertAuthorityInstalled,
            cert_authority_removed_event => CertAuthorityRemoved,
            cert_validation_failure_event => CertValidationFailure,
            crypto_self_test_completed_event => CryptoSelfTestCompleted,
            key_destruction_event => KeyDestruction,
            key_generated_event => KeyGenerated,
            key_import_event => KeyImport,
            key_integrity_violation_event => KeyIntegrityViolation,
            logging_started_event => LoggingStarted,
            logging_stopped_event => LoggingStopped,
            log_buffer_size_critical_event => LogBufferSizeCritical,
            media_mount_event => MediaMount,
            media_unmount_event => MediaUnmount,
            os_shutdown_event => OsShutdown,
            os_startup_event => OsStartup,
            remote_lock_event => RemoteLock,
            wipe_failure_event => WipeFailure,
            connect_event => Connect,
            dns_event => Dns,
            stop_lost_mode_user_attempt_event => StopLostModeUserAttempt,
            lost_mode_outgoing_phone_call_event => LostModeOutgoingPhoneCall,
            lost_mode_location_event => LostModeLocation,
            enrollment_complete_event => EnrollmentComplete,
            backup_service_toggled_event => BackupServiceToggled,
        }

        if payloads.len() > 1 {
            return Err(UnionError::MultiplePopulated {
                field: "event",
                got: payloads.len(),
            });
        }
        Ok(UsageLogEvent {
            event_id: repr.event_id,
            event_time: repr.event_time,
            event_type: repr.event_type,
            event: payloads.pop(),
        })
    }
}

impl From<UsageLogEvent> for UsageLogEventRepr {
    fn from(event: UsageLogEvent) -> Self {
        let mut repr = UsageLogEventRepr {
            event_id: event.event_id,
            event_time: event.event_time,
            event_type: event.event_type,
            ..UsageLogEventRepr::default()
        };
        match event.event {
            Some(UsageLogPayload::AdbShellCommand(e)) => repr.adb_shell_command_event = Some(e),
            Some(UsageLogPayload::AdbShellInteractive(e)) => {
                repr.adb_shell_interactive_event = Some(e)
            }
            Some(UsageLogPayload::AppProcessStart(e)) => repr.app_process_start_event = Some(e),
            Some(UsageLogPayload::KeyguardDismissed(e)) => repr.keyguard_dismissed_event = Some(e),
            Some(UsageLogPayload::KeyguardDismissAuthAttempt(e)) => {
                repr.keyguard_dismiss_auth_attempt_event = Some(e)
            }
            Some(UsageLogPayload::KeyguardSecured(e)) => repr.keyguard_secured_event = Some(e),
            Some(UsageLogPayload::FilePulled(e)) => repr.file_pulled_event = Some(e),
            Some(UsageLogPayload::FilePushed(e)) => repr.file_pushed_event = Some(e),
            Some(UsageLogPayload::CertAuthorityInstalled(e)) => {
                repr.cert_authority_installed_event = Some(e)
            }
            Some(UsageLogPayload::CertAuthorityRemoved(e)) => {
                repr.cert_authority_removed_event = Some(e)
            }
            Some(UsageLogPayload::CertValidationFailure(e)) => {
                repr.cert_validation_failure_event = Some(e)
            }
            Some(UsageLogPayload::CryptoSelfTestCompleted(e)) => {
                repr.crypto_self_test_completed_event = Some(e)
            }
            Some(UsageLogPayload::KeyDestruction(e)) => repr.key_destruction_event = Some(e),
            Some(UsageLogPayload::KeyGenerated(e)) => repr.key_generated_event = Some(e),
            Some(UsageLogPayload::KeyImport(e)) => repr.key_import_event = Some(e),
            Some(UsageLogPayload::KeyIntegrityViolation(e)) => {
                repr.key_integrity_violation_event = Some(e)
            }
            Some(UsageLogPayload::LoggingStarted(e)) => repr.logging_started_event = Some(e),
            Some(UsageLogPayload::LoggingStopped(e)) => repr.logging_stopped_event = Some(e),
            Some(UsageLogPayload::LogBufferSizeCritical(e)) => {
                repr.log_buffer_size_critical_event = Some(e)
            }
            Some(UsageLogPayload::MediaMount(e)) => repr.media_mount_event = Some(e),
            Some(UsageLogPayload::MediaUnmount(e)) => repr.media_unmount_event = Some(e),
            Some(UsageLogPayload::OsShutdown(e)) => repr.os_shutdown_event = Some(e),
            Some(UsageLogPayload::OsStartup(e)) => repr.os_startup_event = Some(e),
            Some(UsageLogPayload::RemoteLock(e)) => repr.remote_lock_event = Some(e),
            Some(UsageLogPayload::WipeFailure(e)) => repr.wipe_failure_event = Some(e),
            Some(UsageLogPayload::Connect(e)) => repr.connect_event = Some(e),
            Some(UsageLogPayload::Dns(e)) => repr.dns_event = Some(e),
            Some(UsageLogPayload::StopLostModeUserAttempt(e)) => {
                repr.stop_lost_mode_user_attempt_event = Some(e)
            }
            Some(UsageLogPayload::LostModeOutgoingPhoneCall(e)) => {
                repr.lost_mode_outgoing_phone_call_event = Some(e)
            }
            Some(UsageLogPayload::LostModeLocation(e)) => repr.lost_mode_location_event = Some(e),
            Some(UsageLogPayload::EnrollmentComplete(e)) => {
                repr.enrollment_complete_event = Some(e)
            }
            Some(UsageLogPayload::BackupServiceToggled(e)) => {
                repr.backup_service_toggled_event = Some(e)
            }
            None => {}
        }
        repr
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    AdbShellCommand,
    AdbShellInteractive,
    AppProcessStart,
    KeyguardDismissed,
    KeyguardDismissAuthAttempt,
    KeyguardSecured,
    FilePulled,
    FilePushed,
    CertAuthorityInstalled,
    CertAuthorityRemoved,
    CertValidationFailure,
    CryptoSelfTestCompleted,
    KeyDestruction,
    KeyGenerated,
    KeyImport,
    KeyIntegrityViolation,
    LoggingStarted,
    LoggingStopped,
    LogBufferSizeCritical,
    MediaMount,
    MediaUnmount,
    OsShutdown,
    OsStartup,
    RemoteLock,
    WipeFailure,
    Connect,
    Dns,
    StopLostModeUserAttempt,
    LostModeOutgoingPhoneCall,
    LostModeLocation,
    EnrollmentComplete,
    BackupServiceToggled,
    #[serde(rename = "EVENT_TYPE_UNSPECIFIED", other)]
    Unspecified,
}

/// Redacted to an empty string on organization-owned managed profile devices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdbShellCommandEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_cmd: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdbShellInteractiveEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProcessInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apk_sha256_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProcessStartEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_info: Option<AppProcessInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyguardDismissedEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyguardDismissAuthAttemptEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_auth_method_used: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyguardSecuredEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePulledEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePushedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertAuthorityInstalledEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertAuthorityRemovedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertValidationFailureEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoSelfTestCompletedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDestructionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_uid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyGeneratedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_uid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyImportEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_uid: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyIntegrityViolationEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_uid: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingStartedEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingStoppedEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogBufferSizeCriticalEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMountEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUnmountEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsShutdownEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsStartupEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_boot_state: Option<VerifiedBootState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verity_mode: Option<DmVerityMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifiedBootState {
    Green,
    Yellow,
    Orange,
    #[serde(rename = "VERIFIED_BOOT_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DmVerityMode {
    Enforcing,
    IoError,
    Disabled,
    #[serde(rename = "DM_VERITY_MODE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteLockEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WipeFailureEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Truncated to at most 10 addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,
    /// int64 wire format; may exceed `ip_addresses.len()` when truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ip_addresses_returned: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLostModeUserAttemptEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttemptStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptStatus {
    AttemptSucceeded,
    AttemptFailed,
    #[serde(rename = "STATUS_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LostModeOutgoingPhoneCallEvent {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostModeLocationEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentCompleteEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackupServiceState {
    BackupServiceDisabled,
    BackupServiceEnabled,
    #[serde(rename = "BACKUP_SERVICE_STATE_UNSPECIFIED", other)]
    Unspecified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupServiceToggledEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_service_state: Option<BackupServiceState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload_matches_event_type() {
        let json = r#"{
            "eventId": "123",
            "eventTime": "2024-10-02T15:01:23Z",
            "eventType": "CONNECT",
            "connectEvent": {"destinationIpAddress": "10.0.0.1", "destinationPort": 443, "packageName": "com.example"}
        }"#;
        let event: UsageLogEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, Some(EventType::Connect));
        match event.event {
            Some(UsageLogPayload::Connect(ref connect)) => {
                assert_eq!(connect.destination_port, Some(443));
            }
            other => panic!("expected connect payload, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_payloads_rejected() {
        let json = r#"{
            "eventType": "DNS",
            "dnsEvent": {"hostname": "example.com"},
            "connectEvent": {"destinationIpAddress": "10.0.0.1"}
        }"#;
        let err = serde_json::from_str::<UsageLogEvent>(json).unwrap_err();
        assert!(err.to_string().contains("event"));
    }

    #[test]
    fn test_empty_payload_event_roundtrips() {
        let json = r#"{"eventId":"9","eventType":"OS_SHUTDOWN","osShutdownEvent":{}}"#;
        let event: UsageLogEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event, Some(UsageLogPayload::OsShutdown(OsShutdownEvent {})));
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn test_batch_sorted_events_deserialize() {
        let json = r#"{
            "device": "enterprises/e1/devices/d1",
            "retrievalTime": "2024-10-02T15:05:00Z",
            "usageLogEvents": [
                {"eventId": "1", "eventType": "OS_STARTUP", "osStartupEvent": {"verifiedBootState": "GREEN", "verityMode": "ENFORCING"}},
                {"eventId": "2", "eventType": "ENROLLMENT_COMPLETE", "enrollmentCompleteEvent": {}}
            ]
        }"#;
        let batch: BatchUsageLogEvents = serde_json::from_str(json).unwrap();
        let events = batch.usage_log_events.unwrap();
        assert_eq!(events.len(), 2);
        match events[0].event {
            Some(UsageLogPayload::OsStartup(ref startup)) => {
                assert_eq!(startup.verified_boot_state, Some(VerifiedBootState::Green));
            }
            ref other => panic!("expected os startup payload, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_type_degrades() {
        let json = r#"{"eventId":"5","eventType":"SOME_FUTURE_EVENT"}"#;
        let event: UsageLogEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, Some(EventType::Unspecified));
        assert!(event.event.is_none());
    }
}
