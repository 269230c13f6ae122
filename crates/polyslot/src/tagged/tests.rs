use crate::Tagged;

#[derive(Debug, Clone, PartialEq)]
struct Pair {
	left: i64,
	right: i64,
}

#[derive(Debug, Clone, PartialEq, Tagged)]
enum Message {
	Count(i64),
	Ratio(f64),
	Label(String),
	Pair(Pair),
	Reset,
}

/// Records which handler ran.
#[derive(Default)]
struct Trace {
	calls: Vec<String>,
}

impl MessageVisitor for Trace {
	type Output = ();

	fn fallback(&mut self, alternative: &'static str) {
		self.calls.push(format!("fallback {alternative}"));
	}

	fn visit_count(&mut self, value: &i64) {
		self.calls.push(format!("count {value}"));
	}

	fn visit_pair(&mut self, value: &Pair) {
		self.calls.push(format!("pair {} {}", value.left, value.right));
	}

	fn visit_reset(&mut self) {
		self.calls.push("reset".to_string());
	}
}

/// Handles nothing specifically.
struct OnlyFallback;

impl MessageVisitor for OnlyFallback {
	type Output = &'static str;

	fn fallback(&mut self, alternative: &'static str) -> &'static str {
		alternative
	}
}

#[test]
fn specific_handler_runs_for_its_alternative() {
	let mut trace = Trace::default();
	Message::Count(42).dispatch(&mut trace);
	Message::Pair(Pair { left: 1, right: 2 }).dispatch(&mut trace);
	Message::Reset.dispatch(&mut trace);
	assert_eq!(trace.calls, ["count 42", "pair 1 2", "reset"]);
}

#[test]
fn unhandled_alternatives_fall_back() {
	let mut trace = Trace::default();
	Message::Ratio(0.5).dispatch(&mut trace);
	Message::Label("x".into()).dispatch(&mut trace);
	assert_eq!(trace.calls, ["fallback Ratio", "fallback Label"]);
}

#[test]
fn zero_specific_handlers_always_fall_back() {
	let values = [
		Message::Count(1),
		Message::Ratio(1.0),
		Message::Label(String::new()),
		Message::Pair(Pair { left: 0, right: 0 }),
		Message::Reset,
	];
	let seen: Vec<_> = values.iter().map(|v| v.dispatch(&mut OnlyFallback)).collect();
	assert_eq!(seen, Message::ALTERNATIVES);
}

#[test]
fn exactly_one_handler_per_dispatch() {
	let mut trace = Trace::default();
	for value in [Message::Count(3), Message::Ratio(2.0), Message::Reset] {
		let before = trace.calls.len();
		value.dispatch(&mut trace);
		assert_eq!(trace.calls.len(), before + 1);
	}
}

#[test]
fn reassignment_changes_active_alternative() {
	let mut value = Message::Count(7);
	assert_eq!(value.tag(), 0);
	value = Message::Label("now text".into());
	assert_eq!(value.tag(), 2);
	assert_eq!(value.alternative(), "Label");
}

#[test]
fn dispatch_is_deterministic() {
	let value = Message::Count(9);
	let mut trace = Trace::default();
	for _ in 0..1000 {
		value.dispatch(&mut trace);
	}
	assert_eq!(trace.calls.len(), 1000);
	assert!(trace.calls.iter().all(|call| call == "count 9"));
}
