use tracing::error;

use crate::application::ports::outbound::{ErrorSink, ListViewError};

/// Routes list view errors to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, err: &ListViewError) {
        match err {
            ListViewError::LoadFailure(source) => {
                error!("Error al cargar empleados: {}", source);
            },
            ListViewError::CommitFailure { id, source } => {
                error!("Error al borrar el empleado {}: {}; restaurado en la lista", id, source);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::EmployeeApiError;

    #[test]
    fn test_reports_every_list_view_error() {
        let sink = TracingErrorSink;

        sink.report(&ListViewError::LoadFailure(EmployeeApiError::Transport("refused".to_string())));
        sink.report(&ListViewError::CommitFailure {
            id: 4,
            source: EmployeeApiError::Status { status: 500, message: "boom".to_string() },
        });
    }
}
