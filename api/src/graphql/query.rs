use crate::graphql::context::{admin, db, found, relay_error, service_error, viewer};
use crate::graphql::inputs::{ApartmentFilterInput, ApartmentSortInput, sort_param};
use crate::graphql::types::{
    APARTMENT, ApartmentConnection, ApartmentEdge, Apartment, BOOKING, Booking, Node, PageInfo,
    REVIEW, Review, USER, User,
};
use crate::graphql::context::coded;
use async_graphql::{Context, ID, Object, Result};
use db::filters::ApartmentFilter;
use services::{
    ServiceError, apartment_service::ApartmentService, booking_service::BookingService,
    review_service::ReviewService, user_service::UserService,
};
use util::relay::{ConnectionArgs, decode_global_id, expect_type};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Apartments as a Relay connection.
    async fn apartments(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<ApartmentFilterInput>,
        order: Option<Vec<ApartmentSortInput>>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<ApartmentConnection> {
        let filter: ApartmentFilter = filter.unwrap_or_default().into();
        let sort = order.as_deref().and_then(sort_param);
        let args = ConnectionArgs { first, after, last, before };

        let slice = ApartmentService::connection(db(ctx)?, &filter, sort.as_deref(), &args)
            .await
            .map_err(service_error)?;

        let window = slice.window;
        let edges: Vec<ApartmentEdge> = slice
            .items
            .into_iter()
            .enumerate()
            .map(|(i, model)| ApartmentEdge { cursor: window.cursor_at(i), node: Apartment(model) })
            .collect();

        let page_info = PageInfo {
            has_next_page: window.has_next_page,
            has_previous_page: window.has_previous_page,
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
        };
        let nodes = edges.iter().map(|e| e.node.clone()).collect();

        Ok(ApartmentConnection { edges, nodes, page_info, total_count: slice.total })
    }

    /// A single apartment by global id, null if it does not exist.
    async fn apartment(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Apartment>> {
        let id = expect_type(&id, APARTMENT).map_err(relay_error)?;
        Ok(found(ApartmentService::get(db(ctx)?, id).await)?.map(Apartment))
    }

    /// Relay node lookup. Bookings and users require a caller allowed to see them.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let (type_name, id) = decode_global_id(&id).map_err(relay_error)?;
        let db = db(ctx)?;

        match type_name.as_str() {
            APARTMENT => Ok(found(ApartmentService::get(db, id).await)?.map(|m| Node::Apartment(Apartment(m)))),
            REVIEW => Ok(found(ReviewService::get(db, id).await)?.map(|m| Node::Review(Review(m)))),
            BOOKING => {
                let claims = viewer(ctx)?;
                Ok(found(BookingService::get(db, claims, id).await)?.map(|m| Node::Booking(Booking(m))))
            }
            USER => {
                let claims = viewer(ctx)?;
                if !claims.can_access(id) {
                    return Err(service_error(ServiceError::Forbidden(
                        "You can only view your own account".into(),
                    )));
                }
                Ok(found(UserService::get(db, id).await)?.map(|m| Node::User(User(m))))
            }
            other => Err(coded(format!("Unknown node type '{other}'"), "BAD_REQUEST")),
        }
    }

    /// Reviews of an apartment, newest first.
    async fn reviews(&self, ctx: &Context<'_>, apartment_id: ID) -> Result<Vec<Review>> {
        let apartment_id = expect_type(&apartment_id, APARTMENT).map_err(relay_error)?;
        let reviews = ReviewService::for_apartment(db(ctx)?, apartment_id)
            .await
            .map_err(service_error)?;
        Ok(reviews.into_iter().map(Review).collect())
    }

    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let claims = viewer(ctx)?;
        let user = UserService::get(db(ctx)?, claims.user_id())
            .await
            .map_err(service_error)?;
        Ok(User(user))
    }

    async fn my_bookings(&self, ctx: &Context<'_>) -> Result<Vec<Booking>> {
        let claims = viewer(ctx)?;
        let bookings = BookingService::for_user(db(ctx)?, claims.user_id())
            .await
            .map_err(service_error)?;
        Ok(bookings.into_iter().map(Booking).collect())
    }

    /// All users. Admin only.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        admin(ctx)?;
        let users = UserService::all(db(ctx)?).await.map_err(service_error)?;
        Ok(users.into_iter().map(User).collect())
    }
}
