/// diesel table for categories
table! {
    categorias (id) {
        id -> Integer,
        nome -> VarChar,
        descricao -> Text,
        tags_seo -> Nullable<VarChar>,
    }
}

/// diesel table for products
table! {
    produtos (id) {
        id -> Integer,
        nome -> VarChar,
        fabricante -> VarChar,
        descricao -> Text,
        quantidade -> Integer,
        preco -> Double,
        categoria_id -> Integer,
    }
}

joinable!(produtos -> categorias (categoria_id));

allow_tables_to_appear_in_same_query!(categorias, produtos);
