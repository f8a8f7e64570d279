pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
}

.btn:hover {
  text-decoration: none;
  transform: translateY(-2px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: transparent;
  color: var(--primary);
  border: 2px solid var(--primary);
}

/* Navigation */
.portfolio-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  order: 2;
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: var(--space-4);
}

.nav-menu a {
  color: var(--text-secondary);
  font-weight: 500;
}

.nav-menu a:hover {
  color: var(--primary);
  text-decoration: none;
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  color: var(--text-primary);
  width: 2.25rem;
  height: 2.25rem;
  cursor: pointer;
}

.mobile-menu-toggle {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  cursor: pointer;
  padding: var(--space-2);
}

.mobile-menu-toggle span {
  display: block;
  width: 22px;
  height: 2px;
  background-color: var(--text-primary);
  transition: transform var(--transition-fast) var(--easing-standard),
              opacity var(--transition-fast) var(--easing-standard);
}

.mobile-menu-toggle span.active:nth-child(1) {
  transform: translateY(6px) rotate(45deg);
}

.mobile-menu-toggle span.active:nth-child(2) {
  opacity: 0;
}

.mobile-menu-toggle span.active:nth-child(3) {
  transform: translateY(-6px) rotate(-45deg);
}

/* Cards and tags */
.card-surface,
.project-card,
.skill-category,
.education-card,
.certification-item,
.contact-item {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  padding: var(--space-6);
}

.skill-tag {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  margin: 0 var(--space-2) var(--space-2) 0;
  border-radius: var(--radius-full);
  background-color: var(--surface-alt);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Scroll reveal */
.animate-on-scroll {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.animate-on-scroll.animate-in {
  opacity: 1;
  transform: translateY(0);
}
"#;
