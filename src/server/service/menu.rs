use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu::MenuRepository,
    error::AppError,
    model::{
        canteen::{duplicate_menu_type_error, today},
        menu::Menu,
    },
    service::canteen::CanteenService,
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the menus a canteen serves today
    ///
    /// # Returns
    /// - `Ok(Vec<Menu>)`: Today's menus, never empty
    /// - `Err(AppError::NotFound)`: Broken school/canteen chain, or no menus for today
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_available(&self, school_id: i32, canteen_id: i32) -> Result<Vec<Menu>, AppError> {
        let canteen = CanteenService::new(self.db).get(school_id, canteen_id).await?;

        let date = today();
        let menus = MenuRepository::new(self.db)
            .find_by_canteen_on(canteen_id, date)
            .await?;

        let available = canteen.with_menus_on(date, menus).available_menus();

        if available.is_empty() {
            return Err(AppError::NotFound(format!(
                "No menus available today for canteen {}",
                canteen_id
            )));
        }

        Ok(available)
    }

    /// Gets a menu filed under the given canteen on any day
    pub async fn get(&self, school_id: i32, canteen_id: i32, menu_id: i32) -> Result<Menu, AppError> {
        CanteenService::new(self.db).get(school_id, canteen_id).await?;

        MenuRepository::new(self.db)
            .find_in_canteen(canteen_id, menu_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Menu {} not found in canteen {}",
                    menu_id, canteen_id
                ))
            })
    }

    /// Files a validated menu as one of today's menus for a canteen
    ///
    /// # Returns
    /// - `Ok(Menu)`: The stored menu
    /// - `Err(AppError::NotFound)`: Broken school/canteen chain
    /// - `Err(AppError::FieldErr)`: The canteen already has a menu of that type today
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, school_id: i32, canteen_id: i32, menu: Menu) -> Result<Menu, AppError> {
        let canteen = CanteenService::new(self.db).get(school_id, canteen_id).await?;
        let repo = MenuRepository::new(self.db);

        let date = today();
        let existing = repo.find_by_canteen_on(canteen_id, date).await?;
        let mut canteen = canteen.with_menus_on(date, existing);

        canteen.add_menu_on(date, menu.clone())?;
        let created = repo
            .create(canteen_id, date, &menu)
            .await
            .map_err(|err| AppError::from_conflict(err, duplicate_menu_type_error))?;

        tracing::info!(
            "Created {} menu {} for canteen {} on {}",
            created.menu_type,
            created.id.unwrap_or_default(),
            canteen_id,
            date
        );

        Ok(created)
    }
}
