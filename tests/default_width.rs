// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default width.  These tests share global state, so they serialize.

use std::sync::Mutex;
use tagwise::{Config, Logger, NameWidth, default_name_width, replace_default_name_width};

static TEST_WIDTH_GUARD: Mutex<()> = Mutex::new(());

#[test]
fn new_loggers_pick_up_the_default() {
    let _guard = TEST_WIDTH_GUARD.lock().unwrap();
    let original = default_name_width();
    for width in 0..50 {
        Logger::set_default_name_width(width);
        assert_eq!(Logger::new().name_width(), NameWidth::Chars(width));
    }
    replace_default_name_width(original);
}

#[test]
fn existing_loggers_keep_theirs() {
    let _guard = TEST_WIDTH_GUARD.lock().unwrap();
    let original = replace_default_name_width(NameWidth::Chars(7));

    let a = Logger::new();
    Logger::set_default_name_width(30);
    let b = Logger::new();

    assert_eq!(a.name_width(), NameWidth::Chars(7));
    assert_eq!(b.name_width(), NameWidth::Chars(30));
    replace_default_name_width(original);
}

#[test]
fn explicit_width_wins() {
    let _guard = TEST_WIDTH_GUARD.lock().unwrap();
    let original = replace_default_name_width(NameWidth::Chars(7));
    let logger = Logger::with_config(Config::new().with_name_width(NameWidth::Disabled));
    assert_eq!(logger.name_width(), NameWidth::Disabled);
    replace_default_name_width(original);
}

#[test]
fn out_of_the_box_default_is_fifteen() {
    let _guard = TEST_WIDTH_GUARD.lock().unwrap();
    // every other test restores the default before releasing the guard
    assert_eq!(default_name_width(), NameWidth::DEFAULT);
    assert_eq!(NameWidth::DEFAULT, NameWidth::Chars(15));
}
