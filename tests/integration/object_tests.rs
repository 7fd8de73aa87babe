use crate::common;
use stream_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_group_project_task_lifecycle() {
    let mut client = common::connect().await;
    let user_id = client.user_id().expect("user id").to_string();

    let group = client
        .create(
            &ObjCode::GROUP,
            &Params::from([
                ("name", common::unique_name("Rust Group").as_str()),
                ("description", "Sample group"),
            ]),
            &[],
        )
        .await
        .expect("create group");
    let group_id = group["ID"].as_str().expect("group ID").to_string();

    let project = client
        .create(
            &ObjCode::PROJECT,
            &Params::new()
                .with("name", common::unique_name("Rust Project"))
                .with("description", "Sample project")
                .with("groupID", &group_id)
                .with("ownerID", &user_id),
            &[],
        )
        .await
        .expect("create project");
    let project_id = project["ID"].as_str().expect("project ID").to_string();

    let mut task_ids = Vec::new();
    for label in ["Rust Task", "Second Rust Task"] {
        let task = client
            .create(
                &ObjCode::TASK,
                &Params::new()
                    .with("name", common::unique_name(label))
                    .with("description", "Sample description")
                    .with("projectID", &project_id),
                &[],
            )
            .await
            .expect("create task");
        task_ids.push(task["ID"].as_str().expect("task ID").to_string());
    }

    client
        .update(
            &ObjCode::TASK,
            &task_ids[0],
            &Params::from([
                ("extRefID", "123456"),
                ("status", "INP"),
                ("assignedToID", user_id.as_str()),
            ]),
            &[],
        )
        .await
        .expect("update task");

    let task = client
        .retrieve(&ObjCode::TASK, &task_ids[0], &["assignments", "status", "extRefID"])
        .await
        .expect("retrieve task");
    assert_eq!(task["extRefID"], "123456");
    info!("Task reference number: {}", task["extRefID"]);

    let ids: Vec<&str> = task_ids.iter().map(String::as_str).collect();
    let listed = client
        .list_by_id(&ObjCode::TASK, &ids, &[])
        .await
        .expect("list tasks");
    assert_eq!(listed.len(), 2);

    let found = client
        .search(
            &ObjCode::TASK,
            &Params::from([("extRefID", "123456"), ("projectID", project_id.as_str())]),
            &[],
        )
        .await
        .expect("search tasks");
    assert!(!found.is_empty());
    info!("Task name: {}", found[0]["name"]);

    // Tasks cannot be deleted by force
    for id in &task_ids {
        client.delete(&ObjCode::TASK, id, false).await.expect("delete task");
    }
    client
        .delete(&ObjCode::PROJECT, &project_id, true)
        .await
        .expect("delete project");
    client
        .delete(&ObjCode::GROUP, &group_id, true)
        .await
        .expect("delete group");

    client.logout().await.expect("logout");
}
