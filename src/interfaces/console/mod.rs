pub mod commands;
pub mod renderer;

use std::sync::Arc;

use crate::application::services::deferred_delete::DeferredDeleteController;
use crate::application::services::employee_form_service::{EmployeeFormService, FormError};
use crate::application::services::navigation::Route;

use self::commands::{Command, HELP};

/// What the terminal loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the list view
    Render,
    Message(String),
    Quit,
}

/// Employee list page driven by console commands
pub struct ConsolePage {
    controller: Arc<DeferredDeleteController>,
    forms: EmployeeFormService,
}

impl ConsolePage {
    pub fn new(controller: Arc<DeferredDeleteController>, forms: EmployeeFormService) -> Self {
        Self { controller, forms }
    }

    pub fn controller(&self) -> &Arc<DeferredDeleteController> {
        &self.controller
    }

    pub async fn execute(&self, command: Command) -> Result<Outcome, FormError> {
        match command {
            Command::List => Ok(Outcome::Render),
            Command::Reload => {
                self.controller.load_all().await;
                Ok(Outcome::Render)
            },
            Command::Add(form) => {
                self.forms.open_add();
                let saved = self.forms.submit(Route::AddEmployee, form).await?;
                self.controller.load_all().await;
                Ok(Outcome::Message(format!("Employee {} added", saved.id())))
            },
            Command::Edit(id) => {
                self.forms.open_update(id);
                let current = self.forms.load(id).await?;
                Ok(Outcome::Message(format!(
                    "Employee {}: {} {} <{}>  (use: update {} <first> <last> <email>)",
                    id, current.first_name, current.last_name, current.email, id
                )))
            },
            Command::Update(id, form) => {
                self.forms.open_update(id);
                let saved = self.forms.submit(Route::UpdateEmployee(id), form).await?;
                self.controller.load_all().await;
                Ok(Outcome::Message(format!("Employee {} updated", saved.id())))
            },
            Command::Delete(id) => {
                let visible = self.controller.snapshot().employees.iter().any(|e| e.id() == id);
                if !visible {
                    return Ok(Outcome::Message(format!("No employee {} in the list", id)));
                }
                self.controller.request_delete(id);
                Ok(Outcome::Render)
            },
            Command::Undo => {
                self.controller.cancel_delete();
                Ok(Outcome::Render)
            },
            Command::Help => Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
