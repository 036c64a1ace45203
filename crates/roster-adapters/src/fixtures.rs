//! Built-in fixture users.
//!
//! Ten records in the shape of the public `jsonplaceholder` users resource.
//! Backs `InMemoryUserGateway::with_fixtures` and therefore `roster --offline`.

use roster_core::domain::User;

const FIXTURE_USERS: [(u64, &str, &str); 10] = [
    (1, "Leanne Graham", "Sincere@april.biz"),
    (2, "Ervin Howell", "Shanna@melissa.tv"),
    (3, "Clementine Bauch", "Nathan@yesenia.net"),
    (4, "Patricia Lebsack", "Julianne.OConner@kory.org"),
    (5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca"),
    (6, "Mrs. Dennis Schulist", "Karley_Dach@jasper.info"),
    (7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz"),
    (8, "Nicholas Runolfsdottir V", "Sherwood@rosamond.me"),
    (9, "Glenna Reichert", "Chaim_McDermott@dana.io"),
    (10, "Clementina DuBuque", "Rey.Padberg@karina.biz"),
];

/// All fixture users in id order.
pub fn all_users() -> Vec<User> {
    FIXTURE_USERS
        .iter()
        .map(|&(id, name, email)| User::new(id, name, email))
        .collect()
}
