/// Object (group, project, task) operations
pub mod object;
