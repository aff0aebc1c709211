pub use super::canteen::Entity as Canteen;
pub use super::dish::Entity as Dish;
pub use super::menu::Entity as Menu;
pub use super::menu_entry::Entity as MenuEntry;
pub use super::school::Entity as School;
