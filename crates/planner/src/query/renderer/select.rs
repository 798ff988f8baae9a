use crate::query::{
    ast::{
        common::OrderDir,
        select::{FromClause, OrderByExpr, Select},
    },
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }

        // 5. LIMIT
        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r);
        }

        // 6. OFFSET
        if let Some(offset) = &self.offset {
            r.sql.push_str(" OFFSET ");
            offset.render(r);
        }
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        r.render_table_ref(&self.table);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            let dir_str = match dir {
                OrderDir::Asc => "ASC",
                OrderDir::Desc => "DESC",
            };
            r.sql.push(' ');
            r.sql.push_str(dir_str);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::{
            common::OrderDir,
            expr::{BinaryOp, BinaryOperator, Expr},
        },
        builder::select::SelectBuilder,
        dialect::MySql,
        ident, literal,
        renderer::{Render, Renderer},
        value,
    };
    use crate::table_ref;
    use model::core::value::Value;

    fn render(select: crate::query::ast::select::Select) -> String {
        let dialect = MySql;
        let mut renderer = Renderer::new(&dialect);
        select.render(&mut renderer);
        renderer.finish()
    }

    #[test]
    fn test_offset_page_mysql() {
        let ast = SelectBuilder::new()
            .select(vec![literal("*")])
            .from(table_ref!("orders"), None)
            .limit(literal(1000))
            .offset(literal(2000))
            .build();

        assert_eq!(render(ast), "SELECT * FROM `orders` LIMIT 1000 OFFSET 2000");
    }

    #[test]
    fn test_filtered_ordered_select_mysql() {
        let ast = SelectBuilder::new()
            .select(vec![ident("id"), ident("name")])
            .from(table_ref!("shop", "users"), Some("u"))
            .and_where(Expr::BinaryOp(Box::new(BinaryOp {
                left: ident("name"),
                op: BinaryOperator::Eq,
                right: value(Value::String("abc".to_string())),
            })))
            .order_by(ident("id"), Some(OrderDir::Desc))
            .limit(literal(10))
            .build();

        assert_eq!(
            render(ast),
            "SELECT `id`, `name` FROM `shop`.`users` AS `u` WHERE (`name` = 'abc') ORDER BY `id` DESC LIMIT 10"
        );
    }
}
