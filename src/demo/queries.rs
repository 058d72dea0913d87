/// A single demo statement: the SQL to run and the label printed above its
/// result table.
#[derive(Debug)]
pub struct DemoQuery {
    pub description: &'static str,
    pub sql: &'static str,
}

/// The ten analytical queries against the cosmetics-shop schema.
pub const QUERIES: &[DemoQuery] = &[
    DemoQuery {
        description: "QUERY 1: All products with categories and brands (JOIN)",
        sql: r#"
            SELECT p.product_name, c.category_name, b.brand_name, p.price, p.stock_quantity
            FROM products p
            JOIN categories c ON p.category_id = c.category_id
            JOIN brands b ON p.brand_id = b.brand_id
            ORDER BY p.price DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 2: Premium products (price > 2000) - WHERE clause",
        sql: r#"
            SELECT product_name, price, stock_quantity
            FROM products
            WHERE price > 2000
            ORDER BY price DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 3: Products by category (COUNT + AVG + HAVING)",
        sql: r#"
            SELECT c.category_name, COUNT(p.product_id) as product_count,
                   ROUND(AVG(p.price)::NUMERIC, 2) as avg_price
            FROM categories c
            LEFT JOIN products p ON c.category_id = p.category_id
            GROUP BY c.category_id, c.category_name
            HAVING COUNT(p.product_id) > 0
            ORDER BY product_count DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 4: Products and stock by brand (GROUP BY + SUM)",
        sql: r#"
            SELECT b.brand_name, COUNT(p.product_id) as products,
                   SUM(p.stock_quantity) as total_stock
            FROM brands b
            LEFT JOIN products p ON b.brand_id = p.brand_id
            GROUP BY b.brand_id, b.brand_name
            HAVING COUNT(p.product_id) > 0
            ORDER BY products DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 5: Top rated products (AVG rating >= 4.0)",
        sql: r#"
            SELECT p.product_name, ROUND(AVG(r.rating)::NUMERIC, 2) as avg_rating,
                   COUNT(r.review_id) as review_count
            FROM products p
            INNER JOIN reviews r ON p.product_id = r.product_id
            GROUP BY p.product_id, p.product_name
            HAVING AVG(r.rating) >= 4.0
            ORDER BY avg_rating DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 6: Products expiring soon (within 6 months) - subquery logic",
        sql: r#"
            SELECT product_name, expiration_date,
                   expiration_date - CURRENT_DATE as days_left
            FROM products
            WHERE expiration_date < CURRENT_DATE + INTERVAL '6 months'
            ORDER BY expiration_date ASC;
        "#,
    },
    DemoQuery {
        description: "QUERY 7: Recent shipments with suppliers (INNER JOIN)",
        sql: r#"
            SELECT p.product_name, su.supplier_name, sh.quantity,
                   sh.cost, sh.shipment_date
            FROM shipments sh
            INNER JOIN products p ON sh.product_id = p.product_id
            INNER JOIN suppliers su ON sh.supplier_id = su.supplier_id
            ORDER BY sh.shipment_date DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 8: Top-5 bestsellers by revenue (SUM + LIMIT)",
        sql: r#"
            SELECT p.product_name, SUM(s.quantity_sold) as total_sold,
                   SUM(s.total_price) as revenue
            FROM products p
            LEFT JOIN sales s ON p.product_id = s.product_id
            WHERE s.sale_id IS NOT NULL
            GROUP BY p.product_id, p.product_name
            ORDER BY revenue DESC
            LIMIT 5;
        "#,
    },
    DemoQuery {
        description: "QUERY 9: Revenue by brand (multiple JOINs + SUM)",
        sql: r#"
            SELECT b.brand_name, SUM(s.total_price) as total_revenue,
                   COUNT(s.sale_id) as sales_count
            FROM brands b
            JOIN products p ON b.brand_id = p.brand_id
            JOIN sales s ON p.product_id = s.product_id
            GROUP BY b.brand_id, b.brand_name
            ORDER BY total_revenue DESC;
        "#,
    },
    DemoQuery {
        description: "QUERY 10: Database statistics (MIN, MAX, AVG, SUM)",
        sql: r#"
            SELECT
                MIN(price) as cheapest,
                MAX(price) as most_expensive,
                ROUND(AVG(price)::NUMERIC, 2) as average_price,
                SUM(stock_quantity) as total_items
            FROM products;
        "#,
    },
];

/// Deliberately unsanitised statements showing what string concatenation
/// lets through. Educational only.
pub const INJECTION_DEMOS: &[DemoQuery] = &[
    DemoQuery {
        description: "INJECTION 1: Boolean bypass (OR 1=1)",
        sql: "SELECT product_name, price FROM products WHERE price > 0 OR 1=1;",
    },
    DemoQuery {
        description: "INJECTION 2: Subquery injection",
        sql: "SELECT product_name FROM products WHERE price > 0 OR (SELECT COUNT(*) FROM brands) > 0;",
    },
    DemoQuery {
        description: "INJECTION 3: UNION attack",
        sql: r#"
            SELECT product_name, CAST(price AS VARCHAR) as price
            FROM products
            UNION ALL
            SELECT brand_name, '9999' FROM brands;
        "#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_queries_and_three_injections() {
        assert_eq!(QUERIES.len(), 10);
        assert_eq!(INJECTION_DEMOS.len(), 3);
    }

    #[test]
    fn every_entry_is_a_labelled_select() {
        for query in QUERIES.iter().chain(INJECTION_DEMOS) {
            assert!(!query.description.is_empty());
            assert!(query.sql.contains("SELECT"), "{}", query.description);
        }
    }

    #[test]
    fn descriptions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for query in QUERIES.iter().chain(INJECTION_DEMOS) {
            assert!(seen.insert(query.description));
        }
    }
}
