use crate::schema::books;

#[derive(Debug, Clone, PartialEq, Eq, diesel::Queryable, diesel::Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Book {
    pub id: i32,
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub is_borrowed: bool,
    pub borrower_id: Option<String>,
}

#[derive(Debug, Clone, diesel::Insertable)]
#[diesel(table_name = books)]
pub struct NewBook {
    pub book_id: String,
    pub title: String,
    pub author: String,
}

/// Both columns are always written, so a None borrower clears the column
#[derive(Debug, Clone, PartialEq, Eq, diesel::AsChangeset)]
#[diesel(table_name = books)]
#[diesel(treat_none_as_null = true)]
pub struct BookStatus {
    pub is_borrowed: bool,
    pub borrower_id: Option<String>,
}
