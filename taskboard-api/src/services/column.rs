/// Column service
///
/// CRUD for board columns with positional ordering. When a create request
/// carries no position, the column is appended: the default position equals
/// the current column count for the board. Two concurrent creates against
/// the same board can race and share a position; an accepted gap of the
/// count-siblings policy, and listing stays deterministic by id tiebreak.

use sqlx::PgPool;
use tracing::info;

use super::{BoardService, ServiceError, ServiceResult};
use crate::{
    dto::{BoardColumnDto, CreateColumnRequest, UpdateColumnRequest},
    mappers,
};
use taskboard_shared::models::board_column::BoardColumn;

/// Service for column CRUD
#[derive(Clone)]
pub struct ColumnService {
    db: PgPool,
    boards: BoardService,
}

impl ColumnService {
    pub fn new(db: PgPool) -> Self {
        Self {
            boards: BoardService::new(db.clone()),
            db,
        }
    }

    /// Creates a column under a board
    ///
    /// # Errors
    ///
    /// `ServiceError::NotFound` when the parent board does not exist.
    pub async fn create_column(&self, request: &CreateColumnRequest) -> ServiceResult<BoardColumnDto> {
        let board = self.boards.find_by_id(request.board_id).await?;

        let position = match request.position {
            Some(position) => position,
            None => BoardColumn::count_by_board(&self.db, board.id).await? as i32,
        };

        let column =
            BoardColumn::create(&self.db, mappers::new_column(request, &board, position)).await?;

        info!(
            column_id = column.id,
            board_id = board.id,
            position,
            "Создана колонка"
        );
        Ok(mappers::column_to_dto(&column))
    }

    /// Lists a board's columns ordered ascending by position
    pub async fn get_columns_by_board(&self, board_id: i64) -> ServiceResult<Vec<BoardColumnDto>> {
        let board = self.boards.find_by_id(board_id).await?;
        let columns = BoardColumn::list_by_board(&self.db, board.id).await?;

        info!(count = columns.len(), board_id, "Получены колонки доски");
        Ok(columns.iter().map(mappers::column_to_dto).collect())
    }

    /// Returns the column as a DTO for display on the client
    pub async fn get_column_by_id(&self, id: i64) -> ServiceResult<BoardColumnDto> {
        let column = self.find_by_id(id).await?;
        info!(column_id = id, "Получена колонка");
        Ok(mappers::column_to_dto(&column))
    }

    /// Returns the column entity for internal use
    ///
    /// Used by the task service when creating or linking tasks.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<BoardColumn> {
        BoardColumn::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Колонка с id={} не найдена", id)))
    }

    /// Overwrites the name; the position only when the request supplies one
    pub async fn update_column(
        &self,
        id: i64,
        request: &UpdateColumnRequest,
    ) -> ServiceResult<BoardColumnDto> {
        let existing = self.find_by_id(id).await?;
        let merged = mappers::merge_column(&existing, request);

        let saved = BoardColumn::update(&self.db, id, &merged.name, merged.position)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Колонка с id={} не найдена", id)))?;

        info!(
            column_id = id,
            name = %saved.name,
            position = saved.position,
            "Обновлена колонка"
        );
        Ok(mappers::column_to_dto(&saved))
    }

    /// Deletes a column; its tasks go with it (cascade)
    pub async fn delete_column(&self, id: i64) -> ServiceResult<()> {
        let deleted = BoardColumn::delete(&self.db, id).await?;
        if !deleted {
            return Err(ServiceError::NotFound(format!(
                "Колонка с id={} не найдена",
                id
            )));
        }

        info!(column_id = id, "Удалена колонка");
        Ok(())
    }
}
