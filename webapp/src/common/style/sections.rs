pub const SECTION_STYLES: &str = r#"
/* Portfolio Section Styles */

.page {
  min-height: 100vh;
}

.page-section {
  padding: var(--space-20) 0;
  scroll-margin-top: var(--header-height);
}

.page-section.band {
  background: var(--surface-band);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-16);
}

.gradient-text {
  background: linear-gradient(90deg, var(--primary-light), var(--cyan), var(--teal));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding-top: var(--header-height);
  text-align: center;
}

.hero-content {
  max-width: 896px;
  margin: 0 auto;
  padding: 0 var(--space-4);
  animation: fade-in 600ms var(--easing-standard);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.hero-summary {
  font-size: 1.125rem;
  color: var(--text-tertiary);
  max-width: 672px;
  margin: 0 auto var(--space-12);
}

.hero-actions {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  justify-content: center;
}

@media (min-width: 640px) {
  .hero-actions { flex-direction: row; }
}

@media (min-width: 768px) {
  .hero-title { font-size: 4.5rem; }
  .hero-subtitle { font-size: 1.875rem; }
}

/* About */
.about-heading {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
}

.about-paragraph {
  color: var(--text-secondary);
  font-size: 1.125rem;
  line-height: 1.75;
  margin-bottom: var(--space-6);
}

.education-card {
  padding: var(--space-6);
  background-color: var(--surface-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

/* Projects */
.project-image {
  aspect-ratio: 16 / 9;
  background-color: var(--slate-700);
  border-radius: var(--radius-lg);
  overflow: hidden;
  margin-bottom: var(--space-4);
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* Experience */
.experience {
  max-width: 768px;
  margin: 0 auto;
}

.experience-period {
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
}

.experience-highlights {
  list-style: none;
  margin: var(--space-4) 0;
}

.experience-highlights li {
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
}

.experience-highlights li::before {
  content: "• ";
}

/* Certifications */
.cert-duration {
  color: var(--text-tertiary);
  font-size: 0.875rem;
  margin-bottom: var(--space-4);
}

/* Tech stack */
.tech-column {
  text-align: center;
}

.tech-icon {
  font-size: 3rem;
  margin-bottom: var(--space-4);
}

.tech-column .badge {
  display: block;
  width: 100%;
}

/* Contact */
.contact-heading {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-8);
}

.contact-channel {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.contact-icon {
  font-size: 1.5rem;
  width: 32px;
  text-align: center;
}

.contact-label {
  color: var(--text-primary);
  font-weight: 500;
}

.contact-detail {
  color: var(--text-tertiary);
}

.social-buttons {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

/* Footer */
.page-footer {
  background-color: var(--slate-900);
  border-top: 1px solid var(--slate-700);
  padding: var(--space-8) 0;
  text-align: center;
}

:root.light .page-footer {
  background-color: var(--slate-100);
  border-top-color: var(--slate-200);
}

.page-footer p {
  color: var(--text-tertiary);
}

.page-footer .tagline {
  font-size: 0.875rem;
  margin-top: var(--space-2);
}

.load-error {
  padding: var(--space-16) var(--space-4);
  text-align: center;
  color: var(--error);
}
"#;
