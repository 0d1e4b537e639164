use crate::state::AppData;

#[derive(Clone, Copy, Debug)]
pub struct Query;

#[juniper::graphql_object(context = AppData)]
impl Query {
    /// a typical hello world
    fn hello() -> &'static str {
        "HEllo World"
    }
}
