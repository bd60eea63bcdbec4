mod pagination;
mod sort;
mod user;
mod user_list_query;
