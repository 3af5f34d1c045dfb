//! Command-line front-end. Each subcommand drives one screen: it sends a
//! single event, waits for the state to settle and prints the result.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use tokio::sync::watch;
use uuid::Uuid;

use crate::config::{Config, ConfigStore};
use crate::domain::{Tag, Task, TaskDraft};
use crate::error::{ErrorKind, ErrorUi};
use crate::repo::Store;
use crate::ui::addtask::{AddTaskEvent, AddTaskViewModel};
use crate::ui::addtasklist::{AddTaskListEvent, AddTaskListViewModel};
use crate::ui::edittask::{EditTaskEvent, EditTaskViewModel};
use crate::ui::edittasklist::{EditTaskListEvent, EditTaskListViewModel};
use crate::ui::home::{HomeEvent, HomeState, HomeViewModel};
use crate::ui::mvi::{UiState, ViewModel};
use crate::ui::taskdetails::{TaskDetailsEvent, TaskDetailsState, TaskDetailsViewModel};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Parser)]
#[command(name = "todometer", version, about = "Task lists with progress tracking")]
pub struct Cli {
    /// Data file (overrides `storage.data_file`)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all task lists
    Lists,
    /// Create a task list and select it
    AddList { name: String },
    /// Rename the selected task list
    RenameList { name: String },
    /// Delete the selected task list with its tasks
    DeleteList,
    /// Select a task list (no id selects the default list)
    Select { id: Option<Uuid> },
    /// Show tasks of the selected list
    Tasks,
    /// Add a task to the selected list
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        tag: Option<Tag>,
        /// Due date, YYYY-MM-DD
        #[arg(long, value_parser = parse_due)]
        due: Option<DateTime<Utc>>,
        /// Checklist entry (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,
    },
    /// Edit a task's fields
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        tag: Option<Tag>,
        #[arg(long, value_parser = parse_due)]
        due: Option<DateTime<Utc>>,
    },
    /// Show a task with its checklist
    Show { id: Uuid },
    /// Mark a task as in progress
    Doing { id: Uuid },
    /// Mark a task as done
    Done { id: Uuid },
    /// Delete a task
    Delete { id: Uuid },
    /// Check a checklist item
    Check { id: Uuid },
    /// Uncheck a checklist item
    Uncheck { id: Uuid },
    /// Append a checklist item to a task
    Item { task_id: Uuid, text: String },
}

fn parse_due(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Load config, open the store and run `cli.command`. Returns the text to
/// print on success.
pub async fn run(cli: Cli) -> Result<String> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = ConfigStore::open(config_path)?;
    if let Some(data) = cli.data {
        config.set_data_file(data);
    }
    let settings = config.get();

    let data_file = settings.storage.data_file.clone();
    let store = Arc::new(
        Store::open(&data_file)
            .with_context(|| format!("failed to open {}", data_file.display()))?,
    );
    tracing::debug!(path = %data_file.display(), command = ?cli.command, "running");

    let app = App {
        store,
        config: settings,
    };
    app.execute(cli.command).await
}

struct App {
    store: Arc<Store>,
    config: Config,
}

impl App {
    async fn execute(&self, command: Command) -> Result<String> {
        match command {
            Command::Lists => self.lists().await,
            Command::AddList { name } => self.add_list(name).await,
            Command::RenameList { name } => self.rename_list(name).await,
            Command::DeleteList => self.delete_list().await,
            Command::Select { id } => {
                self.home_write(HomeEvent::SelectTaskList { id }).await?;
                Ok(match id {
                    Some(id) => format!("selected {id}"),
                    None => "selected default list".to_string(),
                })
            }
            Command::Tasks => self.tasks().await,
            Command::Add {
                title,
                description,
                tag,
                due,
                items,
            } => {
                let draft = TaskDraft {
                    title,
                    description,
                    tag: tag.unwrap_or(self.config.defaults.default_tag),
                    due_date: due,
                };
                self.add(draft, items).await
            }
            Command::Edit {
                id,
                title,
                description,
                tag,
                due,
            } => self.edit(id, title, description, tag, due).await,
            Command::Show { id } => self.show(id).await,
            Command::Doing { id } => {
                self.home_write(HomeEvent::SetTaskDoing { id }).await?;
                Ok(format!("{id} doing"))
            }
            Command::Done { id } => {
                self.home_write(HomeEvent::SetTaskDone { id }).await?;
                Ok(format!("{id} done"))
            }
            Command::Delete { id } => {
                self.home_write(HomeEvent::DeleteTask { id }).await?;
                Ok(format!("deleted {id}"))
            }
            Command::Check { id } => self.set_checked(id, true).await,
            Command::Uncheck { id } => self.set_checked(id, false).await,
            Command::Item { task_id, text } => {
                let vm = TaskDetailsViewModel::new(Arc::clone(&self.store), task_id);
                let before = self.store.snapshot().checklist_items.len();
                let state = send_and_settle(&vm, TaskDetailsEvent::InsertChecklistItem { text }, |s| {
                    !s.is_updating
                })
                .await?;
                check_error(state.error.as_ref())?;
                if self.store.snapshot().checklist_items.len() == before {
                    bail!("checklist item text must not be empty");
                }
                Ok(format!("added item to {task_id}"))
            }
        }
    }

    async fn lists(&self) -> Result<String> {
        let vm = HomeViewModel::new(Arc::clone(&self.store), self.config.defaults.task_order);
        let expected = self.store.snapshot().selected_task_list_id();
        let state = settle(&mut vm.subscribe(), |s| {
            !s.is_loading_tasks
                && s.task_list_selected.as_ref().map(|list| list.id) == expected
                && s.task_lists.len() == self.store.snapshot().task_lists.len()
        })
        .await?;
        check_error(state.error.as_ref())?;

        let marker = |selected: bool| if selected { "*" } else { " " };
        let mut lines = vec![format!(
            "{} (default)  Default",
            marker(state.is_default_task_list_selected)
        )];
        lines.extend(state.task_lists.iter().map(|list| {
            let selected = state.task_list_selected.as_ref() == Some(list);
            format!("{} {}  {}", marker(selected), list.id, list.name)
        }));
        Ok(lines.join("\n"))
    }

    async fn add_list(&self, name: String) -> Result<String> {
        let vm = AddTaskListViewModel::new(Arc::clone(&self.store));
        let state =
            send_and_settle(&vm, AddTaskListEvent::InsertTaskList { name }, |s| !s.is_adding)
                .await?;
        if state.name_input_error {
            bail!("task list name must not be empty");
        }
        check_error(state.error.as_ref())?;
        let id = state
            .task_list_id
            .ok_or_else(|| anyhow!("task list was not created"))?;
        Ok(id.to_string())
    }

    async fn rename_list(&self, name: String) -> Result<String> {
        let vm = EditTaskListViewModel::new(Arc::clone(&self.store));
        settle(&mut vm.subscribe(), |s| !s.is_loading).await?;
        let state = send_and_settle(&vm, EditTaskListEvent::UpdateTaskListName { name }, |s| {
            !s.is_saving
        })
        .await?;
        if state.name_input_error {
            bail!("task list name must not be empty");
        }
        check_error(state.error.as_ref())?;
        Ok("renamed".to_string())
    }

    async fn delete_list(&self) -> Result<String> {
        let Some(selected) = self.store.snapshot().selected_task_list_id() else {
            bail!("the default task list cannot be deleted");
        };
        let vm = HomeViewModel::new(Arc::clone(&self.store), self.config.defaults.task_order);
        settle(&mut vm.subscribe(), |s| {
            s.task_list_selected.as_ref().map(|list| list.id) == Some(selected)
        })
        .await?;
        let state = send_and_settle(&vm, HomeEvent::DeleteTaskList, |s| !s.is_updating).await?;
        check_error(state.error.as_ref())?;
        Ok(format!("deleted {selected}"))
    }

    async fn tasks(&self) -> Result<String> {
        let vm = HomeViewModel::new(Arc::clone(&self.store), self.config.defaults.task_order);
        let expected = self.store.snapshot().selected_task_list_id();
        let state = settle(&mut vm.subscribe(), |s| {
            !s.is_loading_tasks && s.task_list_selected.as_ref().map(|list| list.id) == expected
        })
        .await?;
        check_error(state.error.as_ref())?;
        Ok(render_home(&state))
    }

    async fn add(&self, draft: TaskDraft, items: Vec<String>) -> Result<String> {
        let vm = AddTaskViewModel::new(Arc::clone(&self.store));
        for text in items {
            vm.handle_event(AddTaskEvent::AddChecklistItem { text });
        }
        let state =
            send_and_settle(&vm, AddTaskEvent::InsertTask { draft }, |s| !s.is_adding).await?;
        if state.title_input_error {
            bail!("task title must not be empty");
        }
        check_error(state.error.as_ref())?;
        let id = state
            .task_id
            .ok_or_else(|| anyhow!("task was not created"))?;
        Ok(id.to_string())
    }

    async fn edit(
        &self,
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
        tag: Option<Tag>,
        due: Option<DateTime<Utc>>,
    ) -> Result<String> {
        let vm = EditTaskViewModel::new(Arc::clone(&self.store), id);
        let loaded = settle(&mut vm.subscribe(), |s| !s.is_loading).await?;
        check_error(loaded.error.as_ref())?;
        let task = loaded
            .task
            .ok_or_else(not_found)?;

        let draft = TaskDraft {
            title: title.unwrap_or(task.title),
            description: description.unwrap_or(task.description),
            tag: tag.unwrap_or(task.tag),
            due_date: due.or(task.due_date),
        };
        let state =
            send_and_settle(&vm, EditTaskEvent::UpdateTask { draft }, |s| !s.is_saving).await?;
        if state.title_input_error {
            bail!("task title must not be empty");
        }
        check_error(state.error.as_ref())?;
        Ok(format!("updated {id}"))
    }

    async fn show(&self, id: Uuid) -> Result<String> {
        let vm = TaskDetailsViewModel::new(Arc::clone(&self.store), id);
        let state = settle(&mut vm.subscribe(), |s| {
            !s.is_loading_task && !s.is_loading_checklist
        })
        .await?;
        check_error(state.error.as_ref())?;
        Ok(render_details(&state))
    }

    async fn set_checked(&self, item_id: Uuid, checked: bool) -> Result<String> {
        let task_id = self
            .store
            .snapshot()
            .checklist_items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.task_id)
            .ok_or_else(not_found)?;

        let vm = TaskDetailsViewModel::new(Arc::clone(&self.store), task_id);
        let state = send_and_settle(
            &vm,
            TaskDetailsEvent::SetChecklistItemChecked {
                id: item_id,
                checked,
            },
            |s| !s.is_updating,
        )
        .await?;
        check_error(state.error.as_ref())?;
        Ok(format!(
            "{item_id} {}",
            if checked { "checked" } else { "unchecked" }
        ))
    }

    async fn home_write(&self, event: HomeEvent) -> Result<HomeState> {
        let vm = HomeViewModel::new(Arc::clone(&self.store), self.config.defaults.task_order);
        let state = send_and_settle(&vm, event, |s| !s.is_updating).await?;
        check_error(state.error.as_ref())?;
        Ok(state)
    }
}

/// Send `event` and wait until `settled` holds.
async fn send_and_settle<V, F>(vm: &V, event: V::Event, settled: F) -> Result<V::State>
where
    V: ViewModel,
    F: FnMut(&V::State) -> bool,
{
    let mut rx = vm.subscribe();
    vm.handle_event(event);
    settle(&mut rx, settled).await
}

async fn settle<S, F>(rx: &mut watch::Receiver<S>, settled: F) -> Result<S>
where
    S: UiState,
    F: FnMut(&S) -> bool,
{
    let state = tokio::time::timeout(SETTLE_TIMEOUT, rx.wait_for(settled))
        .await
        .context("timed out waiting for the store")?
        .context("screen closed before settling")?
        .clone();
    Ok(state)
}

fn not_found() -> anyhow::Error {
    anyhow!(ErrorUi::from_kind(&ErrorKind::NotFound).message)
}

fn check_error(error: Option<&ErrorUi>) -> Result<()> {
    match error {
        Some(error) => Err(anyhow!(error.message.clone())),
        None => Ok(()),
    }
}

fn render_home(state: &HomeState) -> String {
    let name = state
        .task_list_selected
        .as_ref()
        .map_or("Default", |list| list.name.as_str());
    let mut lines = vec![format!("{name} ({})", state.percentage())];
    for (heading, tasks) in [("Doing", &state.tasks_doing), ("Done", &state.tasks_done)] {
        lines.push(format!("{heading}:"));
        lines.extend(tasks.iter().map(|task| format!("  {}", render_task_line(task))));
    }
    lines.join("\n")
}

fn render_task_line(task: &Task) -> String {
    let mark = if task.is_done() { "x" } else { " " };
    let mut line = format!("[{mark}] {}  {}", task.id, task.title);
    if let Some(due) = task.due_date {
        line.push_str(&format!("  (due {})", due.format("%Y-%m-%d")));
        if task.is_overdue(Utc::now()) {
            line.push_str(" overdue");
        }
    }
    line
}

fn render_details(state: &TaskDetailsState) -> String {
    let mut lines = Vec::new();
    if let Some(task) = &state.task {
        lines.push(render_task_line(task));
        if !task.description.is_empty() {
            lines.push(format!("  {}", task.description));
        }
        lines.push(format!("  tag: {}", task.tag));
    }
    if !state.checklist_items.is_empty() {
        lines.push(format!("Checklist ({}):", state.checklist_percentage()));
        lines.extend(state.checklist_items.iter().map(|item| {
            let mark = if item.is_checked() { "x" } else { " " };
            format!("  [{mark}] {}  {}", item.id, item.text)
        }));
    }
    lines.join("\n")
}
