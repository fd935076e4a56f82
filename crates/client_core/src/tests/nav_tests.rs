use shared::domain::ArticleCategory;

use super::*;

#[test]
fn news_destinations_with_slug_become_news_detail() {
    for slug in ["lancamento-2025", "a", "com-acentuação"] {
        let route = Route::parse(&format!("/noticias/{slug}"));
        assert_eq!(
            route,
            Route::NewsDetail {
                slug: slug.to_string()
            }
        );
    }
}

#[test]
fn category_destinations_with_slug_become_article_detail() {
    assert_eq!(
        Route::parse("/minhas-palavras/primeiro-texto"),
        Route::ArticleDetail {
            category: ArticleCategory::MinhasPalavras,
            slug: "primeiro-texto".to_string()
        }
    );
    assert_eq!(
        Route::parse("/sobre-escrita/processo"),
        Route::ArticleDetail {
            category: ArticleCategory::SobreEscrita,
            slug: "processo".to_string()
        }
    );
}

#[test]
fn empty_trailing_segment_does_not_match_parameterized_patterns() {
    assert_eq!(
        Route::parse("/noticias/"),
        Route::Other("/noticias/".to_string())
    );
}

#[test]
fn known_literals_map_to_their_routes() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse("/noticias"), Route::NewsList);
    assert_eq!(
        Route::parse("/minhas-palavras"),
        Route::ArticleList {
            category: ArticleCategory::MinhasPalavras
        }
    );
    assert_eq!(Route::parse("/livros"), Route::BookList);
    assert_eq!(Route::parse("/sobre"), Route::About);
    assert_eq!(Route::parse("/contato"), Route::Contact);
}

#[test]
fn unknown_literals_resolve_to_the_home_view() {
    for destination in ["/leitores-jovens", "/livros/rhoars-os-magiciens", "nonsense"] {
        let route = Route::parse(destination);
        assert_eq!(route.view(), View::Home, "destination: {destination}");
    }
}

#[test]
fn article_detail_resolves_to_the_home_view() {
    let route = Route::parse("/minhas-palavras/primeiro-texto");
    assert_eq!(route.view(), View::Home);
}

#[test]
fn detail_route_resolves_to_detail_view_with_its_slug() {
    let route = Route::parse("/noticias/lancamento-2025");
    assert_eq!(
        route.view(),
        View::NewsDetail {
            slug: "lancamento-2025".to_string()
        }
    );
}

#[test]
fn navigate_is_idempotent_for_literal_destinations() {
    let mut once = NavigationController::new();
    once.navigate("/sobre");

    let mut twice = NavigationController::new();
    twice.navigate("/sobre");
    twice.navigate("/sobre");

    assert_eq!(once.current(), twice.current());
}

#[test]
fn navigate_replaces_the_route_and_keeps_no_history() {
    let mut nav = NavigationController::new();
    nav.navigate("/noticias/abc");
    nav.navigate("/livros");
    assert_eq!(nav.current(), &Route::BookList);
}

#[test]
fn every_navigation_schedules_one_scroll_reset() {
    let mut nav = NavigationController::new();
    assert!(!nav.take_scroll_reset());

    nav.navigate("/contato");
    assert!(nav.take_scroll_reset());
    assert!(!nav.take_scroll_reset());

    nav.navigate("/rota-desconhecida");
    assert!(nav.take_scroll_reset());
}

#[test]
fn display_path_strips_the_parameter_suffix() {
    let detail = Route::parse("/noticias/lancamento-2025");
    assert_eq!(detail.display_path(), "/noticias");

    let article = Route::parse("/sobre-escrita/processo");
    assert_eq!(article.display_path(), "/sobre-escrita");
}

#[test]
fn display_path_is_identity_on_unparameterized_routes() {
    for destination in ["/", "/noticias", "/minhas-palavras", "/livros", "/sobre", "/contato"] {
        let route = Route::parse(destination);
        assert_eq!(route.display_path(), destination);
    }
    // Unknown literals compare against the menu by their own path and
    // therefore never highlight an entry.
    assert_eq!(Route::parse("/xyz").display_path(), "/xyz");
}

#[test]
fn display_path_law_matches_the_stripped_route() {
    let parameterized = Route::parse("/minhas-palavras/primeiro-texto");
    let stripped = Route::parse("/minhas-palavras");
    assert_eq!(parameterized.display_path(), stripped.display_path());
}
