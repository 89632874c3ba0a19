//! Notification and alarm preferences. Held in UI state only; saving just
//! acknowledges the change.

use crate::toast::{ToastSpec, ToastVariant};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown alarm mode: '{0}'. Valid options: disarmed, home, away, night")]
    UnknownAlarmMode(String),

    #[error("Unsupported entry delay: '{0}'. Valid options: 0, 15, 30, 45, 60")]
    UnsupportedDelay(String),
}

pub const SETTINGS_SAVED: ToastSpec = ToastSpec {
    title: "Settings Saved",
    description: "Your security preferences have been updated.",
    variant: ToastVariant::Default,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    DoorAlerts,
    MotionAlerts,
    CameraAlerts,
    DailyReports,
    SoundAlerts,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::DoorAlerts,
        NotificationKind::MotionAlerts,
        NotificationKind::CameraAlerts,
        NotificationKind::DailyReports,
        NotificationKind::SoundAlerts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DoorAlerts => "Door/Window Alerts",
            Self::MotionAlerts => "Motion Detection",
            Self::CameraAlerts => "Camera Event Alerts",
            Self::DailyReports => "Daily Security Reports",
            Self::SoundAlerts => "Sound Alerts",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DoorAlerts => "Get notified when doors or windows are opened",
            Self::MotionAlerts => "Receive alerts when motion is detected in monitored areas",
            Self::CameraAlerts => "Get notified when cameras detect suspicious activity",
            Self::DailyReports => "Receive a daily summary of security events",
            Self::SoundAlerts => "Play sound on your device when alerts are received",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Self::DoorAlerts => "door-alerts",
            Self::MotionAlerts => "motion-alerts",
            Self::CameraAlerts => "camera-alerts",
            Self::DailyReports => "daily-reports",
            Self::SoundAlerts => "sound-alerts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NotificationSettings {
    pub door_alerts: bool,
    pub motion_alerts: bool,
    pub camera_alerts: bool,
    pub daily_reports: bool,
    pub sound_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            door_alerts: true,
            motion_alerts: true,
            camera_alerts: false,
            daily_reports: true,
            sound_alerts: true,
        }
    }
}

impl NotificationSettings {
    fn slot(&mut self, kind: NotificationKind) -> &mut bool {
        match kind {
            NotificationKind::DoorAlerts => &mut self.door_alerts,
            NotificationKind::MotionAlerts => &mut self.motion_alerts,
            NotificationKind::CameraAlerts => &mut self.camera_alerts,
            NotificationKind::DailyReports => &mut self.daily_reports,
            NotificationKind::SoundAlerts => &mut self.sound_alerts,
        }
    }

    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::DoorAlerts => self.door_alerts,
            NotificationKind::MotionAlerts => self.motion_alerts,
            NotificationKind::CameraAlerts => self.camera_alerts,
            NotificationKind::DailyReports => self.daily_reports,
            NotificationKind::SoundAlerts => self.sound_alerts,
        }
    }

    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let slot = self.slot(kind);
        *slot = !*slot;
        *slot
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmMode {
    Disarmed,
    #[default]
    Home,
    Away,
    Night,
}

impl AlarmMode {
    pub const ALL: [AlarmMode; 4] = [
        AlarmMode::Disarmed,
        AlarmMode::Home,
        AlarmMode::Away,
        AlarmMode::Night,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disarmed => "disarmed",
            Self::Home => "home",
            Self::Away => "away",
            Self::Night => "night",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Disarmed => "Disarmed",
            Self::Home => "Home Mode",
            Self::Away => "Away Mode",
            Self::Night => "Night Mode",
        }
    }
}

impl fmt::Display for AlarmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlarmMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| SettingsError::UnknownAlarmMode(s.to_string()))
    }
}

/// Seconds between a door opening and the alarm sounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EntryDelay(u8);

impl EntryDelay {
    pub const CHOICES: [EntryDelay; 5] = [
        EntryDelay(0),
        EntryDelay(15),
        EntryDelay(30),
        EntryDelay(45),
        EntryDelay(60),
    ];

    pub fn seconds(self) -> u8 {
        self.0
    }

    pub fn label(self) -> String {
        match self.0 {
            0 => "No Delay".to_string(),
            secs => format!("{secs} Seconds"),
        }
    }
}

impl Default for EntryDelay {
    fn default() -> Self {
        EntryDelay(30)
    }
}

impl FromStr for EntryDelay {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs: u8 = s
            .trim()
            .parse()
            .map_err(|_| SettingsError::UnsupportedDelay(s.to_string()))?;
        Self::CHOICES
            .into_iter()
            .find(|delay| delay.0 == secs)
            .ok_or_else(|| SettingsError::UnsupportedDelay(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AlarmSettings {
    pub mode: AlarmMode,
    pub volume: u8,
    pub entry_delay: EntryDelay,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            mode: AlarmMode::Home,
            volume: 50,
            entry_delay: EntryDelay::default(),
        }
    }
}

impl AlarmSettings {
    pub fn set_volume(&mut self, value: i64) {
        self.volume = value.clamp(0, 100) as u8;
    }

    pub fn set_mode_str(&mut self, value: &str) -> Result<(), SettingsError> {
        self.mode = value.parse()?;
        Ok(())
    }

    pub fn set_entry_delay_str(&mut self, value: &str) -> Result<(), SettingsError> {
        self.entry_delay = value.parse()?;
        Ok(())
    }
}

/// Logs the current preferences and returns the acknowledgement to show.
pub fn save_settings(notifications: &NotificationSettings, alarm: &AlarmSettings) -> ToastSpec {
    match serde_json::to_string(&serde_json::json!({
        "notifications": notifications,
        "alarm": alarm,
    })) {
        Ok(snapshot) => tracing::info!(%snapshot, "security settings saved"),
        Err(err) => tracing::warn!(error = %err, "failed to serialize settings snapshot"),
    }
    SETTINGS_SAVED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_defaults_and_toggle() {
        let mut settings = NotificationSettings::default();
        assert!(settings.door_alerts);
        assert!(!settings.camera_alerts);

        assert!(settings.toggle(NotificationKind::CameraAlerts));
        assert!(settings.get(NotificationKind::CameraAlerts));
        assert!(!settings.toggle(NotificationKind::DoorAlerts));
        assert!(settings.motion_alerts);
    }

    #[test]
    fn test_alarm_mode_parse() {
        assert_eq!("night".parse::<AlarmMode>().unwrap(), AlarmMode::Night);
        assert_eq!(AlarmMode::Away.label(), "Away Mode");
        assert!(matches!(
            "panic".parse::<AlarmMode>(),
            Err(SettingsError::UnknownAlarmMode(_))
        ));
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut alarm = AlarmSettings::default();
        assert_eq!(alarm.volume, 50);
        alarm.set_volume(140);
        assert_eq!(alarm.volume, 100);
        alarm.set_volume(-3);
        assert_eq!(alarm.volume, 0);
    }

    #[test]
    fn test_entry_delay_choices() {
        let mut alarm = AlarmSettings::default();
        assert_eq!(alarm.entry_delay.seconds(), 30);
        alarm.set_entry_delay_str("45").unwrap();
        assert_eq!(alarm.entry_delay.seconds(), 45);
        assert!(alarm.set_entry_delay_str("20").is_err());
        assert!(alarm.set_entry_delay_str("soon").is_err());
        assert_eq!(alarm.entry_delay.seconds(), 45);
        assert_eq!(EntryDelay::CHOICES[0].label(), "No Delay");
        assert_eq!(EntryDelay::CHOICES[4].label(), "60 Seconds");
    }

    #[test]
    fn test_save_returns_acknowledgement() {
        let ack = save_settings(&NotificationSettings::default(), &AlarmSettings::default());
        assert_eq!(ack.title, "Settings Saved");
        assert_eq!(ack.variant, ToastVariant::Default);
    }
}
