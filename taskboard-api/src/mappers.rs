/// Entity mappers
///
/// Pure conversion functions between persisted entities, transport DTOs, and
/// request payloads. No I/O: related entities are resolved by the services
/// and passed in, so a mapper can never trigger a lookup on its own.

use crate::dto::{
    BoardColumnDto, BoardDto, BoardRequest, CreateColumnRequest, CreateTaskRequest, TaskDto,
    UpdateColumnRequest, UpdateTaskRequest, UserDto,
};
use taskboard_shared::models::{
    board::{Board, NewBoard},
    board_column::{BoardColumn, NewBoardColumn},
    task::{NewTask, Task},
    user::User,
};

/// Projects a user onto its DTO; the password hash never leaves the server
pub fn user_to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
    }
}

pub fn board_to_dto(board: &Board) -> BoardDto {
    BoardDto {
        id: board.id,
        title: board.title.clone(),
        owner_id: board.owner_id,
    }
}

pub fn column_to_dto(column: &BoardColumn) -> BoardColumnDto {
    BoardColumnDto {
        id: column.id,
        name: column.name.clone(),
        position: column.position,
        board_id: column.board_id,
    }
}

pub fn task_to_dto(task: &Task) -> TaskDto {
    TaskDto {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        position: task.position,
        column_id: task.column_id,
        assignee_id: task.assignee_id,
    }
}

/// Builds a board insert from a request and its resolved owner
pub fn new_board(request: &BoardRequest, owner: &User) -> NewBoard {
    NewBoard {
        title: request.title.clone(),
        owner_id: owner.id,
    }
}

/// Builds a column insert from a request, its resolved board, and the
/// already-decided position
pub fn new_column(request: &CreateColumnRequest, board: &Board, position: i32) -> NewBoardColumn {
    NewBoardColumn {
        name: request.name.clone(),
        position,
        board_id: board.id,
    }
}

/// Merges an update into an existing column
///
/// Name overwrites unconditionally; position only when the request supplies
/// one, otherwise the existing position is preserved exactly.
pub fn merge_column(existing: &BoardColumn, request: &UpdateColumnRequest) -> BoardColumn {
    BoardColumn {
        id: existing.id,
        name: request.name.clone(),
        position: request.position.unwrap_or(existing.position),
        board_id: existing.board_id,
    }
}

/// Builds a task insert from a request, its resolved column and assignee,
/// and the already-decided position
pub fn new_task(
    request: &CreateTaskRequest,
    column: &BoardColumn,
    assignee: Option<&User>,
    position: i32,
) -> NewTask {
    NewTask {
        title: request.title.clone(),
        description: request.description.clone(),
        position: Some(position),
        column_id: column.id,
        assignee_id: assignee.map(|u| u.id),
    }
}

/// Merges an update into an existing task
///
/// Title, description, and assignee overwrite unconditionally from the
/// request; position only when supplied, else the prior position is kept.
pub fn merge_task(existing: &Task, request: &UpdateTaskRequest, assignee: Option<&User>) -> Task {
    Task {
        id: existing.id,
        title: request.title.clone(),
        description: request.description.clone(),
        position: request.position.or(existing.position),
        column_id: existing.column_id,
        assignee_id: assignee.map(|u| u.id),
    }
}
