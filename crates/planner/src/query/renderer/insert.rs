use crate::query::{
    ast::insert::{Insert, OnConflict},
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");
        let quoted_columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| r.dialect.quote_identifier(c))
            .collect();
        r.sql.push_str(&quoted_columns.join(", "));
        r.sql.push(')');

        // 2. VALUES (...)
        render_values(self, r);

        // 3. ON DUPLICATE KEY UPDATE ...
        if let Some(on_conflict) = &self.on_conflict {
            render_on_conflict(on_conflict, r);
        }
    }
}

fn render_values(insert: &Insert, r: &mut Renderer) {
    r.sql.push_str(" VALUES ");
    for (i, row) in insert.values.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.sql.push('(');
        for (j, val) in row.iter().enumerate() {
            if j > 0 {
                r.sql.push_str(", ");
            }
            val.render(r);
        }
        r.sql.push(')');
    }
}

fn render_on_conflict(on_conflict: &OnConflict, r: &mut Renderer) {
    if on_conflict.assignments.is_empty() {
        return;
    }

    r.sql.push_str(" ON DUPLICATE KEY UPDATE ");
    for (i, assignment) in on_conflict.assignments.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.sql
            .push_str(&r.dialect.quote_identifier(&assignment.column));
        r.sql.push_str(" = ");
        assignment.value.render(r);
    }
}

#[cfg(test)]
mod tests {
    use model::core::value::Value;

    use crate::query::{
        ast::insert::Insert,
        builder::insert::InsertBuilder,
        dialect::MySql,
        renderer::{Render, Renderer},
        value,
    };
    use crate::table_ref;

    fn render(ast: Insert) -> String {
        let dialect = MySql;
        let mut renderer = Renderer::new(&dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }

    #[test]
    fn test_render_batch_insert_mysql() {
        let ast = InsertBuilder::new(table_ref!("users"))
            .columns(&["name", "age"])
            .values(vec![value(Value::String("Alice".into())), value(Value::Int(30))])
            .unwrap()
            .values(vec![value(Value::String("Bob".into())), value(Value::Null)])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            render(ast),
            "INSERT INTO `users` (`name`, `age`) VALUES ('Alice', '30'), ('Bob', NULL)"
        );
    }

    #[test]
    fn test_render_upsert_mysql() {
        let ast = InsertBuilder::new(table_ref!("orders"))
            .columns(&["id", "status"])
            .values(vec![value(Value::Int(1)), value(Value::String("paid".into()))])
            .unwrap()
            .on_conflict_update_all()
            .build()
            .unwrap();

        assert_eq!(
            render(ast),
            concat!(
                "INSERT INTO `orders` (`id`, `status`) VALUES ('1', 'paid') ",
                "ON DUPLICATE KEY UPDATE `id` = VALUES(`id`), `status` = VALUES(`status`)"
            )
        );
    }
}
