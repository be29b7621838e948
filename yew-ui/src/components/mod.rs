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

pub mod assistant_panel;
pub mod call_timer;
pub mod chat_panel;
pub mod config_error;
pub mod error_alert;
pub mod participants_panel;
pub mod video_control_buttons;
pub mod video_player;
