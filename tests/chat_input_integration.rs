use chat_input_state::domain::{AttachedFile, Selectable, Tool};
use chat_input_state::events::{EventOutcome, InputEvent};
use chat_input_state::{AttachmentError, CapacityError, ChatInput, ChatInputOptions, filter};

fn web_search() -> Tool {
    Tool::new("web-search", "Web Search", "Search the web for current information")
}

fn database_query() -> Tool {
    Tool::new("db-query", "Database Query", "Run read-only SQL queries")
}

fn file(id: &str, size: u64) -> AttachedFile {
    AttachedFile::with_id(id, format!("{id}.txt"), size, "text/plain")
}

#[test]
fn test_capacity_scenario() {
    let mut input = ChatInput::new(ChatInputOptions::new(2));

    assert_eq!(input.add_file(file("A", 1)).unwrap().ids(), vec!["A"]);
    assert_eq!(input.add_file(file("B", 1)).unwrap().ids(), vec!["A", "B"]);

    let err = input.add_file(file("C", 1)).unwrap_err();
    assert_eq!(err, CapacityError { max_files: 2 });
    assert_eq!(input.files().ids(), vec!["A", "B"]);
}

#[test]
fn test_toggle_scenario() {
    let mut input = ChatInput::new(ChatInputOptions::new(5));
    let web = web_search();

    assert_eq!(input.toggle_tool(&web).ids(), vec!["web-search"]);
    assert!(input.toggle_tool(&web).is_empty());
}

#[test]
fn test_filter_scenario() {
    let items = vec![web_search(), database_query()];
    let found = filter(&items, "data");
    assert_eq!(found, vec![database_query()]);
}

#[test]
fn test_drag_drop_scenario() {
    let mut input = ChatInput::new(ChatInputOptions::new(5).with_max_file_size(1024));
    input.drag_enter(true);
    assert!(input.is_dragging());

    let err = input.offer_file(file("big", 2048)).unwrap_err();
    assert!(matches!(err, AttachmentError::FileTooLarge(_)));
    assert!(input.files().is_empty());

    assert!(input.offer_file(file("small", 512)).is_ok());
    assert_eq!(input.files().ids(), vec!["small"]);
}

#[test]
fn test_size_gate_is_inclusive() {
    let mut input = ChatInput::new(ChatInputOptions::new(5).with_max_file_size(1024));
    input.drag_enter(true);

    assert!(input.offer_file(file("exact", 1024)).is_ok());
    assert!(input.offer_file(file("over", 1025)).is_err());
    assert_eq!(input.files().ids(), vec!["exact"]);
}

#[test]
fn test_uniqueness_across_operations() {
    let mut input = ChatInput::new(ChatInputOptions::new(10));
    let tools = [web_search(), database_query()];

    for round in 0..5 {
        for tool in &tools {
            input.toggle_tool(tool);
        }
        input.add_file(file("dup", 1)).unwrap();
        input.add_file(file(&format!("f{round}"), 1)).unwrap();
    }

    let mut tool_ids = input.tools().ids();
    tool_ids.sort_unstable();
    tool_ids.dedup();
    assert_eq!(tool_ids.len(), input.tools().len());

    let mut file_ids = input.files().ids();
    file_ids.sort_unstable();
    file_ids.dedup();
    assert_eq!(file_ids.len(), input.files().len());
    assert_eq!(input.files().len(), 6);
}

#[test]
fn test_instances_are_independent() {
    let mut first = ChatInput::new(ChatInputOptions::new(5));
    let second = ChatInput::new(ChatInputOptions::new(10));

    first.toggle_tool(&web_search());
    first.add_file(file("a", 1)).unwrap();

    assert!(second.tools().is_empty());
    assert!(second.files().is_empty());
}

#[test]
fn test_mixed_menu_search() {
    let mut input = ChatInput::new(ChatInputOptions::new(5));
    input.set_search_term("query");

    let menu: Vec<Selectable> = vec![
        web_search().into(),
        database_query().into(),
        AttachedFile::with_id("q", "Query plan.pdf", 10, "application/pdf").into(),
    ];
    let visible: Vec<_> = input.search().apply(&menu);
    assert_eq!(visible.len(), 2);
}

#[test]
fn test_scripted_session() {
    let script = r"
- type: toggle_tool
  tool: { id: web-search, name: Web Search }
- type: set_search
  term: web
- type: drag_enter
- type: drop
  files:
    - { id: ok, name: notes.md, size: 100 }
    - { id: big, name: video.mp4, size: 20000000 }
- type: remove_file
  file_id: ok
- type: clear_search
";
    let events: Vec<InputEvent> = serde_yaml::from_str(script).unwrap();
    let mut input = ChatInput::new(ChatInputOptions::new(3));

    let outcomes: Vec<_> = events
        .into_iter()
        .map(|event| input.apply(event).unwrap())
        .collect();

    let EventOutcome::Dropped(report) = &outcomes[3] else {
        panic!("expected a drop report");
    };
    assert_eq!(report.accepted, vec!["ok"]);
    assert_eq!(report.rejected[0].code, "FILE_TOO_LARGE");

    let snapshot = input.snapshot();
    assert_eq!(snapshot.selected_tools.ids(), vec!["web-search"]);
    assert!(snapshot.attached_files.is_empty());
    assert!(snapshot.search_term.is_empty());
    assert!(!snapshot.drag_active);
    assert_eq!(snapshot.remaining_capacity, 3);
}
