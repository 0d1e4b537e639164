use crate::state::AppData;

#[derive(Clone, Copy, Debug)]
pub struct Query;

#[juniper::graphql_object(context = AppData)]
impl Query {
    /// a typical hello world
    fn hello(#[graphql(default = "World".to_owned())] name: String) -> String {
        format!("Hello {name}")
    }
}

#[cfg(test)]
mod tests {
    use juniper::{Variables, graphql_value};

    use crate::schema::schema;
    use crate::state::AppData;

    #[tokio::test]
    async fn hello_defaults_to_world() {
        let schema = schema();
        let (result, errors) =
            juniper::execute("{ hello }", None, &schema, &Variables::new(), &AppData)
                .await
                .unwrap();

        assert!(errors.is_empty());
        assert_eq!(result, graphql_value!({ "hello": "Hello World" }));
    }

    #[tokio::test]
    async fn hello_greets_by_name() {
        let schema = schema();
        let (result, errors) = juniper::execute(
            r#"{ hello(name: "Alice") }"#,
            None,
            &schema,
            &Variables::new(),
            &AppData,
        )
        .await
        .unwrap();

        assert!(errors.is_empty());
        assert_eq!(result, graphql_value!({ "hello": "Hello Alice" }));
    }

    #[tokio::test]
    async fn repeated_queries_return_identical_results() {
        let schema = schema();
        let query = r#"{ hello(name: "Bob") }"#;

        let (first, _) = juniper::execute(query, None, &schema, &Variables::new(), &AppData)
            .await
            .unwrap();
        let (second, _) = juniper::execute(query, None, &schema, &Variables::new(), &AppData)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_field_is_a_validation_error() {
        let schema = schema();
        let result =
            juniper::execute("{ nonexistent }", None, &schema, &Variables::new(), &AppData).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn response_payload_matches_wire_format() {
        let schema = schema();
        let request = juniper::http::GraphQLRequest::new("{ hello }".to_owned(), None, None);
        let response = request.execute(&schema, &AppData).await;

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"data":{"hello":"Hello World"}}"#
        );
    }
}
