//! nested-select CLI - pick options from a nested list in the terminal
//!
//! Usage: nested-select [OPTIONS] <OPTIONS_FILE>
//!
//! Modes:
//!   (default)   Interactive picker; Enter confirms, Esc/q quits
//!   --select    Toggle the given values in order and print the result
//!   --print     Print the fully expanded control and exit

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use nested_select::config::{self, SelectProps};
use nested_select::ui::terminal::detect_capabilities;
use nested_select::ui::widgets::nested_select::{render, run_interactive};
use nested_select::{
    InteractionController, NestedSelectError, RecordedEvents, SelectEvents, SelectMode,
    SelectOption,
};

/// nested-select - hierarchical multi-select in the terminal
#[derive(Parser, Debug)]
#[command(name = "nested-select")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Option list (.json, .yaml, .yml or .toml)
    options: PathBuf,

    /// Config file (default: ./.nested-select.toml, then user config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field label
    #[arg(long)]
    label: Option<String>,

    /// Text shown when nothing is selected
    #[arg(long)]
    placeholder: Option<String>,

    /// Initially selected values (comma-separated)
    #[arg(long, value_delimiter = ',')]
    initial: Vec<String>,

    /// Allow at most one selection
    #[arg(long)]
    single: bool,

    /// Show the search box
    #[arg(long)]
    search: bool,

    /// Show a count badge instead of chips
    #[arg(long)]
    show_count: bool,

    /// Force the selection to follow the initial values on every update
    #[arg(long)]
    always_sync: bool,

    /// Do not select children along with their parent
    #[arg(long)]
    no_implicit_children: bool,

    /// Only leaves can be selected
    #[arg(long)]
    no_parent_select: bool,

    /// Draw parents without a checkbox
    #[arg(long)]
    hide_parent_checkbox: bool,

    /// Render disabled
    #[arg(long)]
    disabled: bool,

    /// Render read-only
    #[arg(long)]
    read_only: bool,

    /// Mark the field as required
    #[arg(long)]
    required: bool,

    /// Field width in columns
    #[arg(long)]
    width: Option<u16>,

    /// Maximum dropdown rows
    #[arg(long)]
    height: Option<u16>,

    /// Use ASCII instead of Unicode symbols
    #[arg(long)]
    ascii: bool,

    /// Print the selection as JSON
    #[arg(long)]
    json: bool,

    /// Toggle these values in order without a UI (comma-separated)
    #[arg(long, value_delimiter = ',')]
    select: Option<Vec<String>>,

    /// Print the fully expanded control and exit
    #[arg(long)]
    print: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logging = nested_select::logging::init(cli.verbose, cli.log_file.as_deref());

    let cwd = std::env::current_dir().ok();
    let (config, warnings) = config::load_or_default(cli.config.as_deref(), cwd.as_deref())?;
    for warning in &warnings {
        match warning.line {
            Some(line) => eprintln!(
                "warning: unknown config key '{}' in {}:{}",
                warning.key,
                warning.file.display(),
                line
            ),
            None => eprintln!(
                "warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            ),
        }
    }

    let options = config::load_options(&cli.options)
        .with_context(|| format!("failed to load options from {}", cli.options.display()))?;
    let props = build_props(&cli, config.select, options)?;

    let caps = detect_capabilities();
    let unicode = !cli.ascii && config.output.unicode && caps.supports_unicode;
    let json = cli.json || config.output.json;

    if let Some(values) = &cli.select {
        let mut controller = InteractionController::new(props, RecordedEvents::new());
        for value in values {
            if !controller.tree().contains(value) {
                return Err(NestedSelectError::UnknownOption {
                    value: value.clone(),
                }
                .into());
            }
            controller.toggle_option(value);
        }
        tracing::info!(
            updates = controller.events().updates.len(),
            "non-interactive selection done"
        );
        print_selection(controller.selection(), json)?;
        return Ok(());
    }

    if cli.print {
        let mut controller = InteractionController::detached(props);
        controller.activate();
        let parents: Vec<String> = controller
            .tree()
            .options()
            .iter()
            .filter(|o| controller.tree().has_children(&o.value))
            .map(|o| o.value.clone())
            .collect();
        for value in &parents {
            controller.expand(value);
        }
        print!("{}", render(&controller, unicode));
        return Ok(());
    }

    if !caps.is_tty {
        bail!("interactive mode needs a terminal; use --select or --print");
    }

    let base = props.clone();
    let mut controller = InteractionController::new(props, TerminalEvents::default());
    let result = run_interactive(&mut controller, unicode, caps.supports_color, |controller| {
        if let Some(query) = controller.events_mut().pending_search.take() {
            let mut next = base.clone();
            next.options = filter_options(&base.options, &query);
            controller.configure(next);
        }
    })?;

    match result {
        Some(selection) => print_selection(&selection, json)?,
        None => eprintln!("Selection cancelled"),
    }
    Ok(())
}

/// Layer CLI flags over the config file's `[select]` table
fn build_props(cli: &Cli, mut props: SelectProps, options: Vec<SelectOption>) -> Result<SelectProps> {
    props.options = options;

    if let Some(label) = &cli.label {
        props.label = label.clone();
    }
    if let Some(placeholder) = &cli.placeholder {
        props.placeholder = placeholder.clone();
    }
    if cli.single {
        props.mode = SelectMode::Single;
    }
    props.show_search |= cli.search;
    props.show_count |= cli.show_count;
    props.should_always_sync |= cli.always_sync;
    props.hide_parent_checkbox |= cli.hide_parent_checkbox;
    props.is_disabled |= cli.disabled;
    props.is_read_only |= cli.read_only;
    props.is_required |= cli.required;
    if cli.no_implicit_children {
        props.implicitly_select_children = false;
    }
    if cli.no_parent_select {
        props.are_parents_selectable = false;
    }
    if cli.width.is_some() {
        props.width = cli.width;
    }
    if cli.height.is_some() {
        props.height = cli.height;
    }

    if !cli.initial.is_empty() {
        props.initial_values = cli
            .initial
            .iter()
            .map(|value| {
                props
                    .options
                    .iter()
                    .rev()
                    .find(|o| &o.value == value)
                    .cloned()
                    .ok_or_else(|| NestedSelectError::UnknownOption {
                        value: value.clone(),
                    })
            })
            .collect::<Result<_, _>>()?;
    }
    props.resolve_initial_values();

    Ok(props)
}

fn print_selection(selection: &[SelectOption], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(selection)?);
    } else {
        for option in selection {
            println!("{}\t{}", option.value, option.display_label());
        }
    }
    Ok(())
}

/// Keep options whose label matches `query`, plus their ancestors so the
/// matches stay reachable from the roots. An empty query keeps everything.
fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }

    let tree = nested_select::OptionTree::new(options.to_vec());
    let mut keep: HashSet<&str> = HashSet::new();
    for option in options {
        if option.display_label().to_lowercase().contains(&needle) {
            keep.insert(option.value.as_str());
            for ancestor in tree.ancestors(&option.value) {
                if let Some(found) = tree.get(&ancestor) {
                    keep.insert(found.value.as_str());
                }
            }
        }
    }
    options
        .iter()
        .filter(|o| keep.contains(o.value.as_str()))
        .cloned()
        .collect()
}

/// Owner used by the interactive picker.
///
/// Mouse capture is on for the whole session; `listening` tracks whether
/// the control currently wants outside clicks. Search text is queued and
/// applied as a filtered `configure` after the event settles.
#[derive(Debug, Default)]
struct TerminalEvents {
    pending_search: Option<String>,
    listening: bool,
}

impl SelectEvents for TerminalEvents {
    fn on_update(&mut self, selection: &[SelectOption]) {
        tracing::info!(selected = selection.len(), "selection changed");
    }

    fn on_search(&mut self, query: &str) {
        self.pending_search = Some(query.to_string());
    }

    fn load_data(&mut self, option: &SelectOption) {
        // The options file is loaded up front; nothing more to fetch
        tracing::info!(value = %option.value, "no children available");
    }

    fn attach_outside_click(&mut self) {
        tracing::debug!("listening for outside clicks");
        self.listening = true;
    }

    fn detach_outside_click(&mut self) {
        tracing::debug!("stopped listening for outside clicks");
        self.listening = false;
    }
}
