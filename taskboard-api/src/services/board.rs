/// Board service
///
/// CRUD for boards scoped to an owning user. The owner is resolved through
/// the user service by username; boards are otherwise addressed by id with
/// no per-resource ownership check beyond token validity.

use sqlx::PgPool;
use tracing::info;

use super::{ServiceError, ServiceResult, UserService};
use crate::{
    dto::{BoardDto, BoardRequest},
    mappers,
};
use taskboard_shared::models::board::Board;

/// Service for board CRUD
#[derive(Clone)]
pub struct BoardService {
    db: PgPool,
    users: UserService,
}

impl BoardService {
    pub fn new(db: PgPool) -> Self {
        Self {
            users: UserService::new(db.clone()),
            db,
        }
    }

    /// Creates a board owned by the named user
    pub async fn create_board(
        &self,
        request: &BoardRequest,
        owner_username: &str,
    ) -> ServiceResult<BoardDto> {
        let owner = self.users.load_by_username(owner_username).await?;
        let board = Board::create(&self.db, mappers::new_board(request, &owner)).await?;

        info!(
            board_id = board.id,
            username = owner_username,
            "Создана доска"
        );
        Ok(mappers::board_to_dto(&board))
    }

    /// Lists all boards owned by the named user
    pub async fn get_boards_for_user(&self, username: &str) -> ServiceResult<Vec<BoardDto>> {
        info!(username, "Получение всех досок пользователя");
        let user = self.users.load_by_username(username).await?;
        let boards = Board::list_by_owner(&self.db, user.id).await?;
        Ok(boards.iter().map(mappers::board_to_dto).collect())
    }

    /// Returns the board as a DTO for display on the client
    pub async fn get_board_by_id(&self, id: i64) -> ServiceResult<BoardDto> {
        let board = self.find_by_id(id).await?;
        info!(board_id = id, "Получена доска");
        Ok(mappers::board_to_dto(&board))
    }

    /// Returns the board entity for internal use
    ///
    /// Used by the column service when creating or linking columns.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Board> {
        Board::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Доска с id={} не найдена", id)))
    }

    /// Replaces the title of an existing board
    pub async fn update_board(&self, id: i64, request: &BoardRequest) -> ServiceResult<BoardDto> {
        let board = Board::update_title(&self.db, id, &request.title)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Доска с id={} не найдена", id)))?;

        info!(board_id = id, title = %request.title, "Обновлена доска");
        Ok(mappers::board_to_dto(&board))
    }

    /// Deletes a board; columns and tasks go with it (cascade)
    pub async fn delete_board(&self, id: i64) -> ServiceResult<()> {
        let deleted = Board::delete(&self.db, id).await?;
        if !deleted {
            return Err(ServiceError::NotFound(format!(
                "Невозможно удалить: доска с id={} не найдена",
                id
            )));
        }

        info!(board_id = id, "Удалена доска");
        Ok(())
    }
}
