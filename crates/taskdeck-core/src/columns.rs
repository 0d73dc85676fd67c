use crate::board::Task;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Columns {
    groups: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: String,
    pub tasks: Vec<Task>,
}

impl Columns {
    pub fn group(tasks: Vec<Task>) -> Self {
        let mut groups: Vec<Column> = Vec::new();
        for task in tasks {
            match groups.iter().position(|column| column.status == task.status) {
                Some(index) => groups[index].tasks.push(task),
                None => groups.push(Column {
                    status: task.status.clone(),
                    tasks: vec![task],
                }),
            }
        }
        Self { groups }
    }

    pub fn tasks_for(&self, status: &str) -> &[Task] {
        self.groups
            .iter()
            .find(|column| column.status == status)
            .map(|column| column.tasks.as_slice())
            .unwrap_or_default()
    }

    pub fn extra_columns<'a>(&'a self, shown: &'a [&str]) -> impl Iterator<Item = &'a Column> {
        self.groups
            .iter()
            .filter(move |column| !shown.contains(&column.status.as_str()))
    }

    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|column| column.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
