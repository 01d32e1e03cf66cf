// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window file events are only routed while the upload step is shown. The
//! processing timer only exists during the processing step.

use super::Message;
use crate::domain::Step;
use crate::ui::{notifications, upload_area};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Period of the notification auto-dismiss check.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Maps hover and drop window events to the upload area.
fn file_event(event: event::Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    let message = match event {
        event::Event::Window(window::Event::FileHovered(_)) => upload_area::Message::DragEntered,
        event::Event::Window(window::Event::FilesHoveredLeft) => upload_area::Message::DragLeft,
        event::Event::Window(window::Event::FileDropped(path)) => {
            upload_area::Message::Dropped(path)
        }
        _ => return None,
    };
    Some(Message::UploadArea(message))
}

/// Drops are only of interest while a file can still be chosen.
fn routes_file_events(step: Step) -> bool {
    step == Step::Upload
}

/// Timer period, `None` when no timer should run.
fn progress_period(is_processing: bool, interval: Duration) -> Option<Duration> {
    is_processing.then_some(interval)
}

/// File drag-and-drop, active only on the upload step.
pub fn create_event_subscription(step: Step) -> Subscription<Message> {
    if routes_file_events(step) {
        event::listen_with(file_event)
    } else {
        Subscription::none()
    }
}

/// Progress timer, active only while processing.
pub fn create_progress_subscription(is_processing: bool, interval: Duration) -> Subscription<Message> {
    match progress_period(is_processing, interval) {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

/// Auto-dismiss check for visible notifications.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|_| Message::Notification(notifications::NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Session, VideoFile};
    use std::path::PathBuf;

    const INTERVAL: Duration = Duration::from_millis(500);

    fn window_event(event: window::Event) -> Option<Message> {
        file_event(
            event::Event::Window(event),
            event::Status::Ignored,
            window::Id::unique(),
        )
    }

    #[test]
    fn timer_runs_only_during_processing() {
        let mut session = Session::default();
        let mut periods = vec![progress_period(session.is_processing(), INTERVAL)];

        session
            .accept_file(VideoFile::from_declared("/videos/talk.webm").expect("video"))
            .expect("upload step");
        periods.push(progress_period(session.is_processing(), INTERVAL));

        session.start_processing().expect("languages step");
        periods.push(progress_period(session.is_processing(), INTERVAL));

        while session.step() == Step::Processing {
            session.tick().expect("processing step");
        }
        periods.push(progress_period(session.is_processing(), INTERVAL));

        assert_eq!(periods, [None, None, Some(INTERVAL), None]);
    }

    #[test]
    fn file_events_follow_the_upload_step_only() {
        let routed: Vec<Step> = Step::ALL
            .into_iter()
            .filter(|step| routes_file_events(*step))
            .collect();
        assert_eq!(routed, [Step::Upload]);
    }

    #[test]
    fn window_file_events_map_to_upload_area_messages() {
        let path = PathBuf::from("/videos/talk.webm");
        assert!(matches!(
            window_event(window::Event::FileHovered(path.clone())),
            Some(Message::UploadArea(upload_area::Message::DragEntered))
        ));
        assert!(matches!(
            window_event(window::Event::FilesHoveredLeft),
            Some(Message::UploadArea(upload_area::Message::DragLeft))
        ));
        assert!(matches!(
            window_event(window::Event::FileDropped(path.clone())),
            Some(Message::UploadArea(upload_area::Message::Dropped(dropped))) if dropped == path
        ));
        assert!(window_event(window::Event::Focused).is_none());
    }
}
