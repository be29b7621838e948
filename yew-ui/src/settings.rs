/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! User preferences edited on the settings page. Held in memory only.

use enum_display::EnumDisplay;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    Sd,
    #[default]
    Hd,
    Fhd,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 3] = [VideoQuality::Sd, VideoQuality::Hd, VideoQuality::Fhd];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoQuality::Sd => "sd",
            VideoQuality::Hd => "hd",
            VideoQuality::Fhd => "fhd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VideoQuality::Sd => "Standard Definition (480p)",
            VideoQuality::Hd => "High Definition (720p)",
            VideoQuality::Fhd => "Full HD (1080p)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub meeting_reminders: bool,
    pub ai_insights: bool,
    pub chat_messages: bool,
    pub email_reports: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSettings {
    pub quality: VideoQuality,
    pub auto_join_video: bool,
    pub virtual_background: bool,
    pub mirror_video: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub auto_join_muted: bool,
    pub noise_cancellation: bool,
    pub echo_cancellation: bool,
    /// 0..=100
    pub microphone_gain: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    pub enable_assistant: bool,
    pub auto_transcription: bool,
    pub smart_suggestions: bool,
    pub engagement_tracking: bool,
    pub voice_interaction: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub recording_consent: bool,
    pub data_sharing: bool,
    pub analytics_opt_out: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub display_name: String,
    pub email: String,
    pub notifications: NotificationSettings,
    pub video: VideoSettings,
    pub audio: AudioSettings,
    pub assistant: AssistantSettings,
    pub privacy: PrivacySettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            display_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            notifications: NotificationSettings {
                meeting_reminders: true,
                ai_insights: true,
                chat_messages: false,
                email_reports: true,
            },
            video: VideoSettings {
                quality: VideoQuality::Hd,
                auto_join_video: true,
                virtual_background: false,
                mirror_video: true,
            },
            audio: AudioSettings {
                auto_join_muted: false,
                noise_cancellation: true,
                echo_cancellation: true,
                microphone_gain: 50,
            },
            assistant: AssistantSettings {
                enable_assistant: true,
                auto_transcription: true,
                smart_suggestions: true,
                engagement_tracking: true,
                voice_interaction: false,
            },
            privacy: PrivacySettings {
                recording_consent: true,
                data_sharing: false,
                analytics_opt_out: false,
            },
        }
    }
}

/// Tabs of the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumDisplay)]
pub enum SettingsTab {
    Profile,
    Notifications,
    Video,
    Audio,
    Assistant,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 6] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Video,
        SettingsTab::Audio,
        SettingsTab::Assistant,
        SettingsTab::Privacy,
    ];

    pub fn label(&self) -> String {
        match self {
            SettingsTab::Assistant => "AI Assistant".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_round_trips_through_select_value() {
        for quality in VideoQuality::ALL {
            assert_eq!(VideoQuality::parse(quality.as_str()), Some(quality));
        }
        assert_eq!(VideoQuality::parse("4k"), None);
    }

    #[test]
    fn defaults_enable_assistant_and_video() {
        let settings = UserSettings::default();
        assert!(settings.assistant.enable_assistant);
        assert!(settings.video.auto_join_video);
        assert!(!settings.audio.auto_join_muted);
        assert_eq!(settings.video.quality, VideoQuality::Hd);
    }
}
