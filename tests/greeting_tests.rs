use greeter::greeting::hello;
use greeter::logger::{self, sinks};
use parking_lot::Mutex;
use serial_test::serial;
use std::sync::Arc;

#[test]
#[serial]
fn test_hello_with_name() {
    assert_eq!(hello("Tim"), "Hello Tim!");
}

#[test]
#[serial]
fn test_hello_without_name() {
    assert_eq!(hello(""), "Hello!");
}

#[test]
#[serial]
fn test_hello_keeps_whitespace_and_unicode() {
    assert_eq!(hello(" "), "Hello  !");
    assert_eq!(hello("世界"), "Hello 世界!");
}

#[test]
#[serial]
fn test_hello_logging() {
    // 用闭包模拟日志回调
    let last: Arc<Mutex<String>> = Arc::default();
    let slot = last.clone();
    logger::set_handler(move |message, _file, _line| {
        *slot.lock() = message.to_string();
    });

    assert_eq!(hello(""), "Hello!");
    logger::clear_handler();

    assert!(!last.lock().is_empty());
}

#[test]
#[serial]
fn test_hello_reports_call_site() {
    let sites: Arc<Mutex<Vec<(String, u32)>>> = Arc::default();
    let slot = sites.clone();
    logger::set_handler(move |_message, file, line| {
        slot.lock().push((file.to_string(), line));
    });

    hello("Tim");
    logger::clear_handler();

    let sites = sites.lock();
    assert_eq!(sites.len(), 1);
    assert!(sites[0].0.ends_with("greeting.rs"));
    assert!(sites[0].1 > 0);
}

#[test]
#[serial]
fn test_hello_silent_without_handler() {
    let sink = Arc::new(sinks::MemorySink::new());
    sinks::install_sink(sink.clone());
    logger::clear_handler();

    hello("Tim");
    assert!(sink.messages().is_empty());
}
