//! Headless walkthrough: builds a framed three-page tab group, feeds it a scripted key sequence
//! and prints every frame.
//!
//! Set `TAPE_LAYOUT_LOG=/tmp/tape-layout.log` to capture focus and resize events.

use tape_layout::{
    logging, shared, Bindings, EnvConfig, Group, GroupKeyMap, HelpBar, Layout, Model, Msg, Pane,
    Renderable, Sizeable, StatusBar, TabGroup, TabKeyMap, Table, Text, TextInput,
};

fn inbox_page(config: &EnvConfig) -> tape_layout::Result<Group> {
    let header = shared(Text::new("Inbox"));
    let list = shared(
        Pane::new("alice: lunch?\nbob: deploy done\ncarol: review please\ndave: standup")
            .with_styles(config.default_styles()),
    );
    let preview = shared(Pane::new("Select a message.").with_styles(config.default_styles()));
    let help = shared(HelpBar::new(list.borrow().keymap()));
    help.borrow_mut()
        .extend_keymap(&tape_layout::GroupKeyMap::default());

    let mut layout = Layout::new();
    layout.push(header);
    layout.push(list.clone());
    layout.push(preview.clone());
    layout.push(help);

    Group::builder().item(list).item(preview).layout(layout).build()
}

fn log_page(config: &EnvConfig) -> tape_layout::Result<Group> {
    let log = shared(
        Pane::new((1..=40).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n"))
            .with_styles(config.default_styles()),
    );
    let status = shared(StatusBar::new("", "").with_content("LOG", "tail", "40 lines"));

    let mut layout = Layout::new();
    layout.push(log.clone());
    layout.push(status);

    Group::builder().item(log).layout(layout).build()
}

fn search_page(config: &EnvConfig) -> tape_layout::Result<Group> {
    let query = shared(TextInput::new().with_placeholder("Search planets..."));
    let rows = [("Mercury", "0.39"), ("Venus", "0.72"), ("Earth", "1.00"), ("Mars", "1.52")]
        .iter()
        .map(|(name, au)| vec![name.to_string(), au.to_string()])
        .collect();
    let results = shared(
        Table::new(["Planet", "AU"])
            .with_rows(rows)
            .with_rel_widths([70, 30])
            .with_styles(config.default_styles()),
    );

    let bindings = Bindings::new()
        .with_keymap("group", &GroupKeyMap::default())
        .with_keymap("tabs", &TabKeyMap::default())
        .with_keymap("table", results.borrow().keymap())
        .with_short_help(["group.focus_next", "tabs.tab_next"])
        .with_full_help_column(["group.focus_next", "group.focus_prev"])
        .with_full_help_column(["tabs.tab_next", "tabs.tab_prev"])
        .with_full_help_column(["table.row_up", "table.row_down"]);
    let mut help = HelpBar::new(&bindings);
    help.set_show_all(true);

    let mut layout = Layout::new();
    layout
        .add_item(query.clone())
        .add_item(results.clone())
        .add_item(shared(help));

    Group::builder().item(query).item(results).layout(layout).build()
}

fn main() -> tape_layout::Result<()> {
    let config = EnvConfig::from_env();
    logging::init(&config)?;

    let mut tabs = TabGroup::builder()
        .active_tab("Inbox", inbox_page(&config)?)
        .tab("Log", log_page(&config)?)
        .tab("Search", search_page(&config)?)
        .styles(config.default_styles())
        .build()?;

    let mut pending: Vec<Msg> = tabs.init().map(|cmd| cmd.into_messages()).unwrap_or_default();
    tabs.set_size(60, 16);

    let script = [
        "down", "tab", "ctrl+right", "down", "down", "ctrl+right", "M", "a", "tab", "j", "ctrl+left",
    ];
    for key in script {
        for msg in pending.drain(..) {
            tabs.update(&msg);
        }
        if let Some(cmd) = tabs.update(&Msg::key(key)) {
            pending.extend(cmd.into_messages());
        }
        println!("--- after {key} ---\n{}", tabs.view());
    }

    Ok(())
}
