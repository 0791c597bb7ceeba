use reckon::{AngleMode, ErrorKind, Event, HistoryEntry, Session};

fn type_keys(session: &mut Session, keys: &[&str]) {
    for key in keys {
        session.handle(Event::Input((*key).to_string()));
    }
}

fn calculate(session: &mut Session, expression: &str) {
    session.handle(Event::Clear);
    session.handle(Event::Input(expression.to_string()));
    session.handle(Event::Equals);
}

#[test]
fn equals_records_result_and_answer() {
    let mut session = Session::new();
    type_keys(&mut session, &["1", "+", "2", "*", "3"]);
    session.handle(Event::Equals);

    assert_eq!(session.result(), Some("7"));
    assert_eq!(session.expression(), "7");
    assert_eq!(session.answer(), 7.0);
    assert!(session.error().is_none());

    let entry = session.history().get(0).unwrap();
    assert_eq!(entry.expression, "1+2*3");
    assert_eq!(entry.result.as_deref(), Some("7"));
    assert!(entry.timestamp.is_some());
}

#[test]
fn leading_operator_continues_from_answer() {
    let mut session = Session::new();
    calculate(&mut session, "4");
    session.handle(Event::Clear);

    type_keys(&mut session, &["×", "3"]);
    assert_eq!(session.expression(), "ANS×3");
    session.handle(Event::Equals);
    assert_eq!(session.result(), Some("12"));

    session.handle(Event::Clear);
    type_keys(&mut session, &["/", "8"]);
    assert_eq!(session.expression(), "ANS/8");

    session.handle(Event::Clear);
    type_keys(&mut session, &["-", "2"]);
    assert_eq!(session.expression(), "-2");
}

#[test]
fn failed_evaluation_shows_error_and_keeps_answer() {
    let mut session = Session::new();
    calculate(&mut session, "5");
    calculate(&mut session, "2/0");

    assert_eq!(session.display(), "Error");
    assert_eq!(session.error().map(|e| e.kind()), Some(ErrorKind::Math));
    assert_eq!(session.answer(), 5.0);
    assert_eq!(session.history().len(), 1);

    calculate(&mut session, "(1+");
    assert_eq!(session.error().map(|e| e.kind()), Some(ErrorKind::Syntax));
}

#[test]
fn backspace_dismisses_error_before_editing() {
    let mut session = Session::new();
    type_keys(&mut session, &["sqrt(", "-", "4", ")"]);
    session.handle(Event::Equals);
    assert!(session.error().is_some());

    session.handle(Event::Backspace);
    assert!(session.error().is_none());
    assert_eq!(session.expression(), "sqrt(-4)");

    session.handle(Event::Backspace);
    assert_eq!(session.expression(), "sqrt(-4");
    session.handle(Event::Backspace);
    session.handle(Event::Backspace);
    assert_eq!(session.expression(), "sqrt(");
    session.handle(Event::Backspace);
    assert_eq!(session.expression(), "");
}

#[test]
fn typing_after_error_starts_over() {
    let mut session = Session::new();
    calculate(&mut session, "1+*");
    assert!(session.error().is_some());

    session.handle(Event::Input("9".into()));
    assert_eq!(session.expression(), "9");
    assert!(session.error().is_none());
}

#[test]
fn blank_equals_does_nothing() {
    let mut session = Session::new();
    session.handle(Event::Input("   ".into()));
    session.handle(Event::Equals);

    assert!(session.result().is_none());
    assert!(session.error().is_none());
    assert!(session.history().is_empty());
}

#[test]
fn history_is_newest_first_and_bounded() {
    let mut session = Session::with_capacity(3);
    for n in 1..=5 {
        calculate(&mut session, &n.to_string());
    }

    let expressions: Vec<_> = session.history().iter().map(|e| e.expression.as_str()).collect();
    assert_eq!(expressions, ["5", "4", "3"]);
    assert_eq!(session.history().capacity(), 3);

    session.handle(Event::ClearHistory);
    assert!(session.history().is_empty());
}

#[test]
fn default_history_keeps_fifty() {
    let mut session = Session::new();
    for n in 0..60 {
        calculate(&mut session, &format!("{n}+0"));
    }
    assert_eq!(session.history().len(), 50);
    assert_eq!(session.history().get(0).unwrap().expression, "59+0");
}

#[test]
fn selecting_history() {
    let mut session = Session::new();
    calculate(&mut session, "6*7");
    calculate(&mut session, "1");
    let entry = session.history().get(1).cloned().unwrap();

    session.handle(Event::HistorySelected(entry.clone()));
    assert_eq!(session.expression(), "6*7");
    assert_eq!(session.answer(), 1.0);

    session.handle(Event::HistoryResultSelected(entry));
    assert_eq!(session.expression(), "42");
    assert_eq!(session.answer(), 42.0);

    let bare = HistoryEntry { expression: "x".into(),
                              result:     None,
                              timestamp:  None, };
    session.handle(Event::HistoryResultSelected(bare));
    assert_eq!(session.expression(), "");
    assert_eq!(session.answer(), 42.0);
}

#[test]
fn angle_mode_changes_trigonometry() {
    let mut session = Session::new();
    assert_eq!(session.angle_mode(), AngleMode::Deg);
    calculate(&mut session, "sin(90)");
    assert_eq!(session.result(), Some("1"));

    session.handle(Event::ToggleAngleMode);
    assert_eq!(session.angle_mode(), AngleMode::Rad);
    calculate(&mut session, "cos(pi)");
    assert_eq!(session.result(), Some("-1"));

    session.set_angle_mode(AngleMode::Deg);
    calculate(&mut session, "cos(pi)");
    assert_eq!(session.result(), Some("0.998497149864"));
}

#[test]
fn seeded_answer() {
    let mut session = Session::new();
    session.set_answer(2.5);
    type_keys(&mut session, &["^", "2"]);
    session.handle(Event::Equals);
    assert_eq!(session.result(), Some("6.25"));
}
