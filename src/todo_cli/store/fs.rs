use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "todos.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }

    fn load_map(&self) -> Result<HashMap<String, Todo>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(TodoError::Io)?;
        let todos: HashMap<String, Todo> =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(todos)
    }

    fn save_map(&self, todos: &HashMap<String, Todo>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        fs::write(self.data_file(), content).map_err(TodoError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        let mut todos = self.load_map()?;
        todos.insert(todo.id.clone(), todo.clone());
        self.save_map(&todos)
    }

    fn get_todo(&self, id: &str) -> Result<Todo> {
        let todos = self.load_map()?;
        todos
            .get(id)
            .cloned()
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    fn list_todos(&self) -> Result<Vec<Todo>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        Ok(self.load_map()?.into_values().collect())
    }

    fn delete_todo(&mut self, id: &str) -> Result<()> {
        let mut todos = self.load_map()?;
        if todos.remove(id).is_none() {
            return Err(TodoError::NotFound(id.to_string()));
        }
        self.save_map(&todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("todos"));
        (dir, store)
    }

    #[test]
    fn save_and_get() {
        let (_dir, mut store) = temp_store();
        let todo = Todo::new("Buy milk".to_string());
        store.save_todo(&todo).unwrap();

        let loaded = store.get_todo(&todo.id).unwrap();
        assert_eq!(loaded.title, "Buy milk");
        assert_eq!(loaded.id, todo.id);
    }

    #[test]
    fn get_missing_is_not_found() {
        let (_dir, store) = temp_store();
        let err = store.get_todo("nope").unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
    }

    #[test]
    fn list_empty_without_data_dir() {
        let (_dir, store) = temp_store();
        assert!(store.list_todos().unwrap().is_empty());
    }

    #[test]
    fn save_is_an_upsert() {
        let (_dir, mut store) = temp_store();
        let mut todo = Todo::new("Buy milk".to_string());
        store.save_todo(&todo).unwrap();

        todo.complete();
        store.save_todo(&todo).unwrap();

        assert_eq!(store.list_todos().unwrap().len(), 1);
        assert!(store.get_todo(&todo.id).unwrap().completed);
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let (_dir, mut store) = temp_store();
        let todo = Todo::new("Buy milk".to_string());
        store.save_todo(&todo).unwrap();

        store.delete_todo(&todo.id).unwrap();
        assert!(store.list_todos().unwrap().is_empty());

        let err = store.delete_todo(&todo.id).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("todos");

        let todo = Todo::new("Buy milk".to_string());
        FileStore::new(root.clone()).save_todo(&todo).unwrap();

        let reopened = FileStore::new(root);
        assert_eq!(reopened.get_todo(&todo.id).unwrap().title, "Buy milk");
    }
}
