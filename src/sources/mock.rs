use crate::domain::{Article, Category};
use crate::errors::{NewsError, NewsResult};
use crate::sources::query::{ArticleQuery, Order, OrderBy, DEFAULT_PER_PAGE};
use crate::sources::traits::ContentSource;

/// Static portal content, used when no remote install is configured and as
/// a deterministic fixture in tests. Applies the same query semantics as the
/// remote source, in memory.
pub struct MockSource {
    articles: Vec<Article>,
    categories: Vec<Category>,
}

impl MockSource {
    pub fn new() -> Self {
        let articles = vec![
            Article::new(
                "mercado-livre",
                "Mercado Livre agenda solenidade para início das atividades em Marília",
            )
            .with_excerpt(
                "Evento acontece na manhã desta quarta-feira (14), no novo centro de distribuição.",
            )
            .with_content(
                "<p><strong>MARÍLIA -</strong> O Mercado Livre agendou para a manhã desta \
                 quarta-feira (14) a solenidade que marca o início oficial das atividades de seu \
                 novo centro de distribuição em Marília.</p>",
            )
            .with_image("https://marilianoticia.com.br/wp-content/uploads/2025/08/mercado-livre-ok-768x576.jpg")
            .with_category("Economia")
            .with_date("2025-08-14")
            .with_author("Redação ComMarília")
            .with_slug("mercado-livre")
            .with_link("https://marilianoticia.com.br/mercado-livre"),
            Article::new(
                "fabio-conte",
                "Morre o jornalista e apresentador Fábio Conte, aos 42 anos",
            )
            .with_excerpt("Profissional estava internado e lutava contra um câncer.")
            .with_content(
                "<p><strong>MARÍLIA -</strong> A comunicação de Marília está de luto. Morreu na \
                 noite desta terça-feira (13), aos 42 anos, o jornalista e apresentador Fábio \
                 Conte.</p>",
            )
            .with_image("https://marilianoticia.com.br/wp-content/uploads/2025/08/fabio-conte.jpg")
            .with_category("Luto")
            .with_date("2025-08-13")
            .with_author("Redação ComMarília")
            .with_slug("fabio-conte")
            .with_link("https://marilianoticia.com.br/fabio-conte"),
            Article::new(
                "transito",
                "Zona Oeste de Marília recebe ação para reduzir lentidão no trânsito",
            )
            .with_excerpt("Alterações visam melhorar o fluxo de veículos em horários de pico.")
            .with_content(
                "<p><strong>MARÍLIA -</strong> A Emdurb iniciou uma série de alterações no \
                 trânsito da zona Oeste da cidade, com o objetivo de diminuir os congestionamentos \
                 em horários de pico.</p>",
            )
            .with_image("https://marilianoticia.com.br/wp-content/uploads/2025/08/transito-768x576.jpeg")
            .with_category("Trânsito")
            .with_date("2025-08-12")
            .with_author("Redação ComMarília")
            .with_slug("transito")
            .with_link("https://marilianoticia.com.br/transito"),
            Article::new(
                "sacolinhas",
                "Mudança em lei não garante sacolinhas gratuitas em Marília",
            )
            .with_excerpt("Nova legislação estadual não se sobrepõe à lei municipal existente.")
            .with_content(
                "<p><strong>MARÍLIA -</strong> Uma nova lei estadual que regulamenta a \
                 distribuição de sacolas plásticas em São Paulo gerou dúvidas nos consumidores de \
                 Marília.</p>",
            )
            .with_image("https://marilianoticia.com.br/wp-content/uploads/2025/07/sacola-04-768x511.jpg")
            .with_category("Cidade")
            .with_date("2025-07-30")
            .with_author("Redação ComMarília")
            .with_slug("sacolinhas")
            .with_link("https://marilianoticia.com.br/sacolinhas"),
        ];

        let categories = vec![
            Category::new(1, "Economia", "economia", 1),
            Category::new(2, "Luto", "luto", 1),
            Category::new(3, "Trânsito", "transito", 1),
            Category::new(4, "Cidade", "cidade", 1),
        ];

        Self {
            articles,
            categories,
        }
    }

    fn category_names(&self, ids: &[u64]) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .map(|c| c.name.clone())
            .collect()
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSource for MockSource {
    fn list_articles(&self, query: &ArticleQuery) -> NewsResult<Vec<Article>> {
        let category_names = self.category_names(&query.categories);

        let mut matches: Vec<Article> = self
            .articles
            .iter()
            .filter(|article| {
                query.categories.is_empty() || category_names.contains(&article.category)
            })
            .filter(|article| match query.search.as_deref() {
                Some(needle) if !needle.is_empty() => {
                    let needle = needle.to_lowercase();
                    article.title.to_lowercase().contains(&needle)
                        || article.excerpt.to_lowercase().contains(&needle)
                }
                _ => true,
            })
            .cloned()
            .collect();

        match query.orderby {
            OrderBy::Title => matches.sort_by(|a, b| a.title.cmp(&b.title)),
            // ISO dates compare correctly as strings
            OrderBy::Date | OrderBy::Modified => matches.sort_by(|a, b| a.date.cmp(&b.date)),
            OrderBy::Relevance => {}
        }
        if query.order == Order::Desc && query.orderby != OrderBy::Relevance {
            matches.reverse();
        }

        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE) as usize;
        let page = query.page.unwrap_or(1).max(1) as usize;
        let start = (page - 1) * per_page;

        Ok(matches.into_iter().skip(start).take(per_page).collect())
    }

    fn get_article(&self, id: &str) -> NewsResult<Article> {
        self.articles
            .iter()
            .find(|article| article.id == id || article.slug == id)
            .cloned()
            .ok_or(NewsError::Remote {
                status: 404,
                status_text: "Not Found".to_string(),
            })
    }

    fn list_categories(&self) -> NewsResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category(&self, id: u64) -> NewsResult<Category> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or(NewsError::Remote {
                status: 404,
                status_text: "Not Found".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_newest_first_by_default() {
        let source = MockSource::new();
        let articles = source.list_articles(&ArticleQuery::new()).unwrap();

        assert_eq!(articles.len(), 4);
        assert_eq!(articles[0].id, "mercado-livre");
        assert_eq!(articles[3].id, "sacolinhas");
    }

    #[test]
    fn test_category_filter() {
        let source = MockSource::new();
        let query = ArticleQuery::new().categories(vec![2]);
        let articles = source.list_articles(&query).unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].category, "Luto");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let source = MockSource::new();
        let query = ArticleQuery::new().search("MERCADO");
        let articles = source.list_articles(&query).unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "mercado-livre");
    }

    #[test]
    fn test_pagination_slices() {
        let source = MockSource::new();
        let page1 = source
            .list_articles(&ArticleQuery::new().page(1).per_page(2))
            .unwrap();
        let page2 = source
            .list_articles(&ArticleQuery::new().page(2).per_page(2))
            .unwrap();
        let page3 = source
            .list_articles(&ArticleQuery::new().page(3).per_page(2))
            .unwrap();

        assert_eq!(page1.len(), 2);
        assert_eq!(page2.len(), 2);
        assert!(page3.is_empty());
        assert_ne!(page1[0].id, page2[0].id);
    }

    #[test]
    fn test_title_ordering_ascending() {
        let source = MockSource::new();
        let query = ArticleQuery::new()
            .orderby(OrderBy::Title)
            .order(Order::Asc);
        let articles = source.list_articles(&query).unwrap();

        let titles: Vec<&String> = articles.iter().map(|a| &a.title).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_get_article_by_slug() {
        let source = MockSource::new();
        let article = source.get_article("fabio-conte").unwrap();
        assert_eq!(article.category, "Luto");
    }

    #[test]
    fn test_get_article_unknown_is_remote_404() {
        let source = MockSource::new();
        let result = source.get_article("nope");

        assert!(matches!(
            result,
            Err(NewsError::Remote { status: 404, .. })
        ));
    }

    #[test]
    fn test_categories_listed() {
        let source = MockSource::new();
        let categories = source.list_categories().unwrap();

        assert_eq!(categories.len(), 4);
        assert_eq!(source.get_category(3).unwrap().slug, "transito");
    }
}
