use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

// everything the page needs, bundled into a single stylesheet
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background: var(--background);
  background-attachment: fixed;
  line-height: 1.5;
  transition: color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary-light);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Navigation */
.app-header {
  background-color: var(--nav-background);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--border-subtle);
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
}

.nav-links {
  display: none;
  gap: var(--space-8);
  align-items: center;
}

.nav-link {
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  cursor: pointer;
  color: var(--text-secondary);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary-light);
}

.nav-link.active {
  color: var(--primary-light);
  border-bottom-color: var(--primary-light);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.menu-toggle {
  display: inline-flex;
}

.mobile-menu {
  background-color: var(--surface-raised);
  border-top: 1px solid var(--border-subtle);
  padding: var(--space-2) var(--space-2) var(--space-3);
}

.mobile-menu .nav-link {
  display: block;
  width: 100%;
  text-align: left;
  font-size: 1rem;
  border-bottom: none;
}

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .menu-toggle { display: none; }
  .mobile-menu { display: none; }
}
"#,
    SECTION_STYLES
);
