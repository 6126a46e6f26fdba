use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Iterable, Order, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::future::Future;
use std::pin::Pin;

/// Read-side query layer shared by every entity.
///
/// Implementors translate a typed filter into a `Condition` and map sort field
/// names onto columns; the default methods take care of execution, paging and
/// counting. Writes go through the models' own helpers and services.
pub trait Repository<E, F>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    F: Sync,
{
    /// Sort applied when the caller does not ask for one.
    const DEFAULT_SORT: &'static str = "id";

    fn apply_filter(query: Select<E>, filter: &F) -> Select<E>;

    /// Column for a public sort field name, `None` for unknown fields.
    fn sort_column(field: &str) -> Option<E::Column>;

    /// Orders by a comma-separated field list (`-field` for descending).
    ///
    /// Unknown fields are skipped and the primary key is always appended so
    /// that offsets stay stable between pages.
    fn apply_sorting(mut query: Select<E>, sort_by: Option<&str>) -> Select<E> {
        let sort = match sort_by.map(str::trim) {
            Some(sort) if !sort.is_empty() => sort,
            _ => Self::DEFAULT_SORT,
        };
        for (field, order) in sort_fields(sort) {
            if let Some(column) = Self::sort_column(field) {
                query = query.order_by(column, order);
            }
        }
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        query
    }

    fn find_by_id<'a>(
        db: &'a DatabaseConnection,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Pin<Box<dyn Future<Output = Result<Option<E::Model>, DbErr>> + Send + 'a>> {
        let query = E::find_by_id(id);
        Box::pin(async move { query.one(db).await })
    }

    fn find_one<'a>(
        db: &'a DatabaseConnection,
        filter: &'a F,
        sort_by: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<Option<E::Model>, DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            let query = Self::apply_sorting(query, sort_by);
            query.one(db).await
        })
    }

    fn find_all<'a>(
        db: &'a DatabaseConnection,
        filter: &'a F,
        sort_by: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<E::Model>, DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            let query = Self::apply_sorting(query, sort_by);
            query.all(db).await
        })
    }

    /// One page (1-based) of matching rows together with the total match count.
    fn filter<'a>(
        db: &'a DatabaseConnection,
        filter: &'a F,
        page: u64,
        per_page: u64,
        sort_by: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<(Vec<E::Model>, u64), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            let query = Self::apply_sorting(query, sort_by);
            let page_index = page.saturating_sub(1);
            let paginator =
                <Select<E> as sea_orm::PaginatorTrait<'_, _>>::paginate(query, db, per_page.max(1));
            let total = paginator.num_items().await?;
            let items = paginator.fetch_page(page_index).await?;
            Ok((items, total))
        })
    }

    /// Rows `[offset, offset + limit)` of the sorted result set.
    fn slice<'a>(
        db: &'a DatabaseConnection,
        filter: &'a F,
        sort_by: Option<&'a str>,
        offset: u64,
        limit: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<E::Model>, DbErr>> + Send + 'a>> {
        Box::pin(async move {
            if limit == 0 {
                return Ok(Vec::new());
            }
            let query = Self::apply_filter(E::find(), filter);
            let query = Self::apply_sorting(query, sort_by);
            query.offset(offset).limit(limit).all(db).await
        })
    }

    fn count<'a>(
        db: &'a DatabaseConnection,
        filter: &'a F,
    ) -> Pin<Box<dyn Future<Output = Result<u64, DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            <Select<E> as sea_orm::PaginatorTrait<'_, _>>::count(query, db).await
        })
    }

    fn exists<'a>(
        db: &'a DatabaseConnection,
        filter: &'a F,
    ) -> Pin<Box<dyn Future<Output = Result<bool, DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            let count = <Select<E> as sea_orm::PaginatorTrait<'_, _>>::count(query, db).await?;
            Ok(count > 0)
        })
    }
}

/// Splits `"name,-price"` into `[("name", Asc), ("price", Desc)]`.
pub fn sort_fields(sort: &str) -> Vec<(&str, Order)> {
    sort.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| match field.strip_prefix('-') {
            Some(field) => (field, Order::Desc),
            None => (field, Order::Asc),
        })
        .collect()
}

/// Case-insensitive substring match: `LOWER(column) LIKE '%needle%' ESCAPE '\'`.
///
/// `%` and `_` in `needle` match literally.
pub fn ilike<C: IntoColumnRef>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.trim().to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
