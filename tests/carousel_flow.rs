//! End-to-end tests for the screen flow and the carousel session,
//! driven with simulated time through `App::advance`.

use std::time::Duration;

use showcase::cli::AppConfig;
use showcase::ui::app::{App, Screen};

fn make_app() -> App {
    App::new(AppConfig {
        segment_duration: Duration::from_secs(1),
        tick_rate: Duration::from_millis(50),
        open_carousel: false,
    })
}

fn open_carousel(app: &mut App) {
    app.enter_intermediate();
    app.open_carousel();
    assert_eq!(app.screen(), Screen::Carousel);
}

// -- Screen flow -------------------------------------------------------------

#[test]
fn starts_on_main_and_walks_to_the_carousel() {
    let mut app = make_app();
    assert_eq!(app.screen(), Screen::Main);
    assert!(app.session().is_none());

    app.enter_intermediate();
    assert_eq!(app.screen(), Screen::Intermediate);

    app.open_carousel();
    assert_eq!(app.screen(), Screen::Carousel);
    let session = app.session().expect("carousel session");
    assert_eq!(session.story().count(), 4);
    assert!(session.progress().is_running());
    assert_eq!(session.progress().active_segment(), Some(0));
}

#[test]
fn carousel_cannot_open_from_the_main_screen() {
    let mut app = make_app();
    app.open_carousel();
    assert_eq!(app.screen(), Screen::Main);
    assert!(app.session().is_none());
}

#[test]
fn escape_from_intermediate_returns_to_main() {
    let mut app = make_app();
    app.enter_intermediate();
    app.back_to_main();
    assert_eq!(app.screen(), Screen::Main);
}

#[test]
fn autoplay_config_opens_the_carousel_immediately() {
    let app = App::new(AppConfig {
        segment_duration: Duration::from_secs(1),
        tick_rate: Duration::from_millis(50),
        open_carousel: true,
    });
    assert_eq!(app.screen(), Screen::Carousel);
    assert!(app.session().is_some());
}

// -- Timer-driven session ----------------------------------------------------

#[test]
fn four_seconds_show_three_more_slides_then_detach_once() {
    let mut app = make_app();
    open_carousel(&mut app);

    let mut slide_changes = 0;
    let mut detachments = 0;
    let mut attached = true;
    let mut last_slide = app.session().expect("session").story().current();

    // 4.0s of simulated time in 50ms ticks, no user interaction.
    for _ in 0..80 {
        app.advance(Duration::from_millis(50));
        match app.session() {
            Some(session) => {
                let current = session.story().current();
                if current != last_slide {
                    slide_changes += 1;
                    last_slide = current;
                }
            }
            None => {
                if attached {
                    detachments += 1;
                    attached = false;
                }
            }
        }
    }

    assert_eq!(slide_changes, 3, "segments 1, 2, 3 each swap the slide");
    assert_eq!(detachments, 1, "the view detaches exactly once");
    assert_eq!(app.screen(), Screen::Intermediate);

    // The session is gone; more time changes nothing.
    app.advance(Duration::from_secs(10));
    assert_eq!(app.screen(), Screen::Intermediate);
    assert!(app.session().is_none());
}

#[test]
fn manual_jump_does_not_reset_the_timer() {
    let mut app = make_app();
    open_carousel(&mut app);

    app.advance(Duration::from_millis(500));
    app.jump_to_slide(2);
    let session = app.session().expect("session");
    assert_eq!(session.story().current(), 2);
    assert_eq!(
        session.progress().active_segment(),
        Some(0),
        "page-control input must not touch the progress bar"
    );

    // The original segment boundary still arrives on schedule, and the
    // auto-advance path shows its own slide.
    app.advance(Duration::from_millis(500));
    let session = app.session().expect("session");
    assert_eq!(session.progress().active_segment(), Some(1));
    assert_eq!(session.story().current(), 1);
}

#[test]
fn swipes_wrap_without_touching_the_timer() {
    let mut app = make_app();
    open_carousel(&mut app);

    app.advance(Duration::from_millis(300));
    app.previous_slide();
    let session = app.session().expect("session");
    assert_eq!(session.story().current(), 3, "cyclic wrap to the last slide");
    assert_eq!(session.progress().active_segment(), Some(0));
    assert!((session.progress().fill_fraction() - 0.3).abs() < 1e-9);

    app.next_slide();
    assert_eq!(app.session().expect("session").story().current(), 0);
}

#[test]
fn pause_stops_the_clock_and_resume_continues_it() {
    let mut app = make_app();
    open_carousel(&mut app);

    app.advance(Duration::from_millis(300));
    app.toggle_pause();
    app.advance(Duration::from_secs(5));
    let session = app.session().expect("session");
    assert!(session.progress().is_paused());
    assert!((session.progress().fill_fraction() - 0.3).abs() < 1e-9);

    app.toggle_pause();
    app.advance(Duration::from_millis(700));
    let session = app.session().expect("session");
    assert_eq!(session.progress().active_segment(), Some(1));
    assert_eq!(session.story().current(), 1);
}

#[test]
fn skip_on_the_last_segment_ends_the_session() {
    let mut app = make_app();
    open_carousel(&mut app);

    for _ in 0..3 {
        app.skip_to_next();
    }
    let session = app.session().expect("session");
    assert_eq!(session.progress().active_segment(), Some(3));
    assert_eq!(session.story().current(), 3);

    app.skip_to_next();
    assert!(app.session().is_none(), "finish tears the session down");
    assert_eq!(app.screen(), Screen::Intermediate);
}

#[test]
fn dismissal_stops_the_timer_deterministically() {
    let mut app = make_app();
    open_carousel(&mut app);

    app.advance(Duration::from_millis(100));
    app.dismiss_carousel();
    assert_eq!(app.screen(), Screen::Intermediate);
    assert!(app.session().is_none());

    // No callbacks can fire against the torn-down carousel.
    app.advance(Duration::from_secs(10));
    assert_eq!(app.screen(), Screen::Intermediate);
}

#[test]
fn rewind_during_the_first_moments_of_a_segment_steps_back_a_slide() {
    let mut app = make_app();
    open_carousel(&mut app);

    app.advance(Duration::from_millis(1050));
    let session = app.session().expect("session");
    assert_eq!(session.story().current(), 1);

    app.rewind_to_previous();
    let session = app.session().expect("session");
    assert_eq!(session.progress().active_segment(), Some(0));
    assert_eq!(session.story().current(), 0);
}
