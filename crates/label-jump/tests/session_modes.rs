use label_jump::{
    HostAdapter, JumpConfig, LabelAlphabet, Mode, RenderedLabel, Session, SessionState, Span,
    Status, VisualClass, start_jump, start_multi_jump, start_select,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

type Pos = (usize, usize);

#[derive(Debug, Default)]
struct RecordingHost {
    spans: Vec<String>,
    rendered: Vec<RenderedLabel<Pos>>,
    render_calls: usize,
    clear_calls: usize,
    primary: Option<Pos>,
    selection: Option<(Pos, Pos)>,
    cursors: Option<Vec<Pos>>,
    anchor: Pos,
    status: Option<Status>,
    resets: Vec<String>,
}

impl RecordingHost {
    fn new(spans: &[&str]) -> Self {
        Self {
            spans: spans.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    fn rendered_glyphs(&self) -> Vec<(char, VisualClass)> {
        self.rendered.iter().map(|l| (l.glyph, l.class)).collect()
    }
}

impl HostAdapter for RecordingHost {
    type Position = Pos;

    fn visible_spans(&self) -> Vec<Span> {
        self.spans
            .iter()
            .enumerate()
            .map(|(id, text)| Span::new(id, text.as_str()))
            .collect()
    }

    fn resolve(&self, span_id: usize, offset: usize) -> Pos {
        (span_id, offset)
    }

    fn render_labels(&mut self, labels: &[RenderedLabel<Pos>]) {
        self.render_calls += 1;
        self.rendered = labels.to_vec();
    }

    fn clear_labels(&mut self) {
        self.clear_calls += 1;
        self.rendered.clear();
    }

    fn set_primary_cursor(&mut self, position: Pos) {
        self.primary = Some(position);
    }

    fn set_selection(&mut self, anchor: Pos, head: Pos) {
        self.selection = Some((anchor, head));
    }

    fn replace_cursors(&mut self, positions: Vec<Pos>) {
        self.cursors = Some(positions);
    }

    fn current_selection_anchor(&self) -> Pos {
        self.anchor
    }

    fn show_status(&mut self, status: &Status) {
        self.status = Some(*status);
    }

    fn reset_query(&mut self, needle: &str) {
        self.resets.push(needle.to_string());
    }
}

fn config() -> Arc<JumpConfig> {
    Arc::new(JumpConfig::default())
}

#[test]
fn test_start_without_host_is_noop() {
    assert!(start_jump::<RecordingHost>(None, config()).is_none());
    assert!(start_multi_jump::<RecordingHost>(None, config()).is_none());
    assert!(start_select::<RecordingHost>(None, config()).is_none());
}

#[test]
fn test_start_shows_prompt() {
    let mut host = RecordingHost::new(&["the cat"]);
    let session = start_jump(Some(&mut host), config()).unwrap();
    assert_eq!(session.mode(), Mode::Jump);
    assert_eq!(session.state(), SessionState::Open);
    assert_eq!(host.status, Some(Status::Prompt));
}

#[test]
fn test_jump_commits_on_first_label() {
    let mut host = RecordingHost::new(&["the cat", "a car"]);
    let mut session = start_jump(Some(&mut host), config()).unwrap();

    assert_eq!(
        session.on_query_changed(&mut host, "ca"),
        SessionState::Open
    );
    assert_eq!(
        host.rendered_glyphs(),
        vec![('A', VisualClass::Labeled), ('B', VisualClass::Labeled)]
    );
    assert_eq!(
        host.status,
        Some(Status::Labeled {
            total: 2,
            mode: Mode::Jump,
            toggled: 0
        })
    );
    assert_eq!(session.target('B'), Some(&(1, 2)));

    assert_eq!(
        session.on_query_changed(&mut host, "caB;x"),
        SessionState::Committed
    );
    assert_eq!(host.primary, Some((1, 2)));
    assert!(host.rendered.is_empty());
    assert_eq!(host.clear_calls, 1);
    assert!(session.labels().is_empty());
}

#[test]
fn test_jump_only_first_action_counts() {
    let mut host = RecordingHost::new(&["the cat", "a car"]);
    let mut session = start_jump(Some(&mut host), config()).unwrap();
    assert_eq!(
        session.on_query_changed(&mut host, "caBA"),
        SessionState::Committed
    );
    assert_eq!(host.primary, Some((1, 2)));
}

#[test]
fn test_jump_unresolved_label_still_commits() {
    let mut host = RecordingHost::new(&["the cat"]);
    let mut session = start_jump(Some(&mut host), config()).unwrap();
    assert_eq!(
        session.on_query_changed(&mut host, "caZ"),
        SessionState::Committed
    );
    assert_eq!(host.primary, None);
    assert_eq!(host.clear_calls, 1);
}

#[test]
fn test_jump_accept_ends_without_moving() {
    let mut host = RecordingHost::new(&["the cat"]);
    let mut session = start_jump(Some(&mut host), config()).unwrap();
    session.on_query_changed(&mut host, "ca");
    assert_eq!(session.on_accept(&mut host), SessionState::Committed);
    assert_eq!(host.primary, None);
}

#[test]
fn test_select_extends_from_current_anchor() {
    let mut host = RecordingHost::new(&["let x = y;"]);
    host.anchor = (0, 1);
    let mut session = start_select(Some(&mut host), config()).unwrap();
    assert_eq!(session.on_query_changed(&mut host, "y"), SessionState::Open);
    host.anchor = (0, 3);
    assert_eq!(
        session.on_query_changed(&mut host, "yA"),
        SessionState::Committed
    );
    assert_eq!(host.selection, Some(((0, 3), (0, 8))));
    assert_eq!(host.primary, None);
}

#[test]
fn test_multi_jump_toggle_then_accept() {
    let mut host = RecordingHost::new(&["cat car cow"]);
    let mut session = start_multi_jump(Some(&mut host), config()).unwrap();

    assert_eq!(
        session.on_query_changed(&mut host, "caAB"),
        SessionState::Open
    );
    assert_eq!(session.selection().iter().collect::<String>(), "AB");
    assert_eq!(host.resets, vec!["ca".to_string()]);
    assert_eq!(
        host.rendered_glyphs(),
        vec![('A', VisualClass::Toggled), ('B', VisualClass::Toggled)]
    );
    assert!(host.rendered[0].style.bold);

    assert_eq!(
        session.on_query_changed(&mut host, "caA"),
        SessionState::Open
    );
    assert_eq!(session.selection().iter().collect::<String>(), "B");
    assert_eq!(
        host.rendered_glyphs(),
        vec![('A', VisualClass::Labeled), ('B', VisualClass::Toggled)]
    );
    assert_eq!(
        host.status,
        Some(Status::Labeled {
            total: 2,
            mode: Mode::MultiJump,
            toggled: 1
        })
    );
    assert_eq!(host.cursors, None);

    assert_eq!(session.on_accept(&mut host), SessionState::Committed);
    assert_eq!(host.cursors, Some(vec![(0, 4)]));
    assert!(host.rendered.is_empty());
}

#[test]
fn test_multi_jump_accept_with_nothing_toggled_stays_open() {
    let mut host = RecordingHost::new(&["cat car"]);
    let mut session = start_multi_jump(Some(&mut host), config()).unwrap();
    session.on_query_changed(&mut host, "ca");
    assert_eq!(session.on_accept(&mut host), SessionState::Open);
    assert_eq!(host.status, Some(Status::NothingToggled));
    assert_eq!(host.cursors, None);
    assert_eq!(host.clear_calls, 0);
}

#[test]
fn test_multi_jump_drops_glyphs_that_no_longer_resolve() {
    let mut host = RecordingHost::new(&["cat car cow"]);
    let mut session = start_multi_jump(Some(&mut host), config()).unwrap();
    session.on_query_changed(&mut host, "caAB");
    // Narrowing to "cat" leaves only the first candidate labeled.
    session.on_query_changed(&mut host, "cat");
    assert_eq!(session.labels().len(), 1);
    assert_eq!(session.selection().len(), 2);

    assert_eq!(session.on_accept(&mut host), SessionState::Committed);
    assert_eq!(host.cursors, Some(vec![(0, 0)]));
}

#[test]
fn test_multi_jump_accept_with_no_resolvable_glyph_keeps_cursors() {
    let mut host = RecordingHost::new(&["cat car"]);
    let mut session = start_multi_jump(Some(&mut host), config()).unwrap();
    session.on_query_changed(&mut host, "caB");
    host.spans = vec!["dog".to_string()];
    session.on_query_changed(&mut host, "ca");
    assert_eq!(session.on_accept(&mut host), SessionState::Committed);
    assert_eq!(host.cursors, None);
}

#[test]
fn test_multi_jump_xor_across_keystrokes() {
    let mut host = RecordingHost::new(&["cat car cab"]);
    let mut session = start_multi_jump(Some(&mut host), config()).unwrap();
    for raw in ["caA", "caBC", "caAA", "caC", "caA"] {
        session.on_query_changed(&mut host, raw);
    }
    // A: 1 + 2 + 1 = 4 (even), B: 1 (odd), C: 2 (even)
    assert_eq!(session.selection().iter().collect::<String>(), "B");
}

#[test]
fn test_labels_recomputed_after_scroll() {
    let mut host = RecordingHost::new(&["cat"]);
    let mut session = start_jump(Some(&mut host), config()).unwrap();
    session.on_query_changed(&mut host, "ca");
    assert_eq!(session.target('A'), Some(&(0, 0)));

    host.spans = vec!["xx".to_string(), "a cab".to_string()];
    session.on_query_changed(&mut host, "ca");
    assert_eq!(session.target('A'), Some(&(1, 2)));
}

#[test]
fn test_cancel_is_terminal_and_side_effect_free() {
    let mut host = RecordingHost::new(&["cat"]);
    let mut session = start_jump(Some(&mut host), config()).unwrap();
    session.on_query_changed(&mut host, "c");
    assert_eq!(session.on_cancel(&mut host), SessionState::Cancelled);
    assert!(host.rendered.is_empty());
    assert_eq!(host.clear_calls, 1);

    let renders = host.render_calls;
    assert_eq!(
        session.on_query_changed(&mut host, "cA"),
        SessionState::Cancelled
    );
    assert_eq!(session.on_accept(&mut host), SessionState::Cancelled);
    assert_eq!(host.render_calls, renders);
    assert_eq!(host.primary, None);
}

#[test]
fn test_too_many_matches_status() {
    let alphabet = LabelAlphabet::new("AB".chars()).unwrap();
    let mut host = RecordingHost::new(&["apple", "apex", "bat"]);
    let mut session: Session<Pos> =
        Session::new(Mode::Jump, Arc::new(JumpConfig::with_alphabet(alphabet)));
    session.on_query_changed(&mut host, "a");
    assert_eq!(host.status, Some(Status::TooMany { total: 3 }));
    assert!(host.rendered.is_empty());
    assert_eq!(session.total_matches(), 3);

    session.on_query_changed(&mut host, "q");
    assert_eq!(host.status, Some(Status::NoMatches));
    session.on_query_changed(&mut host, "");
    assert_eq!(host.status, Some(Status::Prompt));
}
