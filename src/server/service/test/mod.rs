mod canteen;
mod dish;
mod menu;
