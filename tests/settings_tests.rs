//! Integration tests for the settings page model and its acknowledgement toast

use safehome::settings::{
    AlarmMode, AlarmSettings, NotificationKind, NotificationSettings, SETTINGS_SAVED,
    save_settings,
};
use safehome::toast::{ToastQueue, ToastVariant};

#[test]
fn test_every_toggle_flips_independently() {
    for kind in NotificationKind::ALL {
        let mut settings = NotificationSettings::default();
        let before = settings.get(kind);
        settings.toggle(kind);
        assert_eq!(settings.get(kind), !before, "{:?}", kind);

        let others_unchanged = NotificationKind::ALL
            .into_iter()
            .filter(|other| *other != kind)
            .all(|other| settings.get(other) == NotificationSettings::default().get(other));
        assert!(others_unchanged);
    }
}

#[test]
fn test_select_values_round_through_alarm_settings() {
    let mut alarm = AlarmSettings::default();
    assert_eq!(alarm.mode, AlarmMode::Home);

    for mode in AlarmMode::ALL {
        alarm.set_mode_str(mode.as_str()).unwrap();
        assert_eq!(alarm.mode, mode);
    }

    assert!(alarm.set_mode_str("vacation").is_err());
    assert_eq!(alarm.mode, AlarmMode::Night);
}

#[test]
fn test_save_queues_acknowledgement() {
    let mut notifications = NotificationSettings::default();
    notifications.toggle(NotificationKind::SoundAlerts);
    let mut alarm = AlarmSettings::default();
    alarm.set_volume(75);

    let ack = save_settings(&notifications, &alarm);
    assert_eq!(ack, SETTINGS_SAVED);

    let mut toasts = ToastQueue::default();
    toasts.push_spec(&ack);
    let toast = &toasts.items()[0];
    assert_eq!(toast.title, "Settings Saved");
    assert_eq!(toast.description, "Your security preferences have been updated.");
    assert_eq!(toast.variant, ToastVariant::Default);
}
