//! Route stack. The route left on top after a push or pop is the one that
//! gains focus.

use crate::model::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    ProductDetail(Product),
    Wishlist,
    Settings,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Discover Products",
            Route::ProductDetail(_) => "Product Details",
            Route::Wishlist => "My Wishlist",
            Route::Settings => "Settings",
        }
    }
}

#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the home route.
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        // The root route is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route` unless it is already on top. Either way it ends up focused.
    pub fn push(&mut self, route: Route) {
        if self.current() != &route {
            self.stack.push(route);
        }
    }

    /// Pop the top route. Returns false at the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home_and_root_is_sticky() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), &Route::Home);
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = Navigator::new();
        let product = Product::new("1", "Lamp", "", "20", "");

        nav.push(Route::ProductDetail(product.clone()));
        nav.push(Route::ProductDetail(product));
        assert_eq!(nav.depth(), 2);

        nav.push(Route::Wishlist);
        assert_eq!(nav.current().title(), "My Wishlist");

        assert!(nav.pop());
        assert!(matches!(nav.current(), Route::ProductDetail(_)));
        assert!(nav.pop());
        assert_eq!(nav.current(), &Route::Home);
    }
}
