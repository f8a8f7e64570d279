pub const SECTION_STYLES: &str = r#"
.container {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

section {
  padding: var(--space-16) 0;
  scroll-margin-top: var(--header-height);
}

section:nth-of-type(even) {
  background-color: var(--surface-alt);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-12);
  color: var(--text-primary);
}

/* Hero */
.hero-section {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: calc(var(--header-height) + var(--space-8));
}

.hero-content {
  display: flex;
  align-items: center;
  gap: var(--space-12);
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.hero-image img {
  width: 280px;
  height: 280px;
  border-radius: var(--radius-full);
  object-fit: cover;
  box-shadow: var(--shadow-lg);
}

.hero-badge {
  display: inline-block;
  padding: var(--space-1) var(--space-4);
  border-radius: var(--radius-full);
  background-color: var(--surface-alt);
  color: var(--primary);
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.hero-name {
  font-size: 3rem;
  font-weight: 800;
}

.hero-title {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.hero-description {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.hero-buttons,
.hero-social {
  display: flex;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.social-link {
  font-size: 1.5rem;
  color: var(--text-secondary);
}

/* About */
.about-content p {
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.about-highlights {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-6);
  text-align: center;
}

.highlight-number {
  display: block;
  font-size: 2.25rem;
  font-weight: 800;
  color: var(--primary);
}

.highlight-label {
  color: var(--text-secondary);
}

/* Experience */
.timeline {
  position: relative;
  padding-left: var(--space-8);
  border-left: 2px solid var(--border);
}

.timeline-item {
  position: relative;
  margin-bottom: var(--space-8);
}

.timeline-marker {
  position: absolute;
  left: calc(-1 * var(--space-8) - 7px);
  top: var(--space-2);
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.timeline-header {
  display: flex;
  flex-direction: column;
  margin-bottom: var(--space-3);
}

.timeline-header .company {
  color: var(--primary);
  font-weight: 500;
}

.timeline-header .duration,
.timeline-details {
  color: var(--text-secondary);
}

.timeline-details {
  padding-left: var(--space-6);
}

/* Skills, projects, education */
.skills-grid,
.projects-grid,
.education-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.skill-header {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.skill-icon {
  font-size: 1.75rem;
}

.project-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-2);
  margin-bottom: var(--space-3);
}

.project-badge {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--accent);
  color: var(--text-inverse);
  font-size: 0.75rem;
}

.project-description,
.project-features,
.tech-stack-text,
.education-institution {
  color: var(--text-secondary);
  margin-bottom: var(--space-3);
}

.project-features {
  padding-left: var(--space-6);
}

.education-card {
  text-align: center;
}

.education-icon {
  font-size: 2.5rem;
  color: var(--primary);
}

.education-grade {
  font-weight: 600;
}

/* Certifications and contact */
.certifications-list,
.contact-info {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  max-width: 640px;
  margin: 0 auto;
}

.certification-item,
.contact-item {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.certification-item i,
.contact-item i {
  font-size: 1.75rem;
  color: var(--primary);
}

/* Footer */
.portfolio-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
}

/* Responsive */
@media (max-width: 768px) {
  .mobile-menu-toggle {
    display: flex;
  }

  .nav-menu {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    padding: var(--space-4);
    background-color: var(--surface);
    box-shadow: var(--shadow-md);
    transform: translateY(-150%);
    transition: transform var(--transition-fast) var(--easing-standard);
  }

  .nav-menu.active {
    transform: translateY(0);
  }

  .hero-content {
    flex-direction: column;
    text-align: center;
  }

  .hero-buttons,
  .hero-social {
    justify-content: center;
  }

  .about-highlights {
    grid-template-columns: 1fr;
  }
}
"#;
