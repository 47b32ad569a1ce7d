use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::employee::Employee;
use crate::domain::repositories::employee_repository::{
    EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult,
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// Repositorio en memoria, usado cuando no hay base de datos configurada
#[derive(Default)]
pub struct EmployeeMemoryRepository {
    table: RwLock<Table>,
}

impl EmployeeMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeMemoryRepository {
    async fn create(&self, employee: Employee) -> EmployeeRepositoryResult<Employee> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|e| e.email() == employee.email()) {
            return Err(EmployeeRepositoryError::AlreadyExists(employee.email().to_string()));
        }

        table.last_id += 1;
        let stored = employee.with_id(table.last_id);
        table.rows.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> EmployeeRepositoryResult<Employee> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(EmployeeRepositoryError::NotFound(id))
    }

    async fn find_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, employee: Employee) -> EmployeeRepositoryResult<Employee> {
        let mut table = self.table.write().await;

        let duplicate_email = table.rows.values()
            .any(|e| e.id() != employee.id() && e.email() == employee.email());
        if duplicate_email {
            return Err(EmployeeRepositoryError::AlreadyExists(employee.email().to_string()));
        }

        match table.rows.get_mut(&employee.id()) {
            Some(row) => {
                *row = employee.clone();
                Ok(employee)
            },
            None => Err(EmployeeRepositoryError::NotFound(employee.id())),
        }
    }

    async fn delete_by_id(&self, id: i64) -> EmployeeRepositoryResult<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id)
            .map(|_| ())
            .ok_or(EmployeeRepositoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(first: &str, email: &str) -> Employee {
        Employee::new(0, first, "Tester", email)
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let repo = EmployeeMemoryRepository::new();

        let a = repo.create(employee("A", "a@example.com")).await.unwrap();
        let b = repo.create(employee("B", "b@example.com")).await.unwrap();
        repo.delete_by_id(b.id()).await.unwrap();
        let c = repo.create(employee("C", "c@example.com")).await.unwrap();

        assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let repo = EmployeeMemoryRepository::new();

        assert!(matches!(repo.find_by_id(5).await, Err(EmployeeRepositoryError::NotFound(5))));
        assert!(matches!(repo.delete_by_id(5).await, Err(EmployeeRepositoryError::NotFound(5))));
        assert!(matches!(
            repo.update(Employee::new(5, "X", "Y", "x@example.com")).await,
            Err(EmployeeRepositoryError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_email_must_be_unique() {
        let repo = EmployeeMemoryRepository::new();
        repo.create(employee("A", "same@example.com")).await.unwrap();
        let other = repo.create(employee("B", "other@example.com")).await.unwrap();

        assert!(matches!(
            repo.create(employee("C", "same@example.com")).await,
            Err(EmployeeRepositoryError::AlreadyExists(_))
        ));
        assert!(matches!(
            repo.update(other.with_details("B", "Tester", "same@example.com")).await,
            Err(EmployeeRepositoryError::AlreadyExists(_))
        ));
    }
}
