pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
  text-decoration: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary-dark);
  color: white;
}

.btn-primary:hover {
  background-color: #1D4ED8;
}

.btn-gradient {
  background: linear-gradient(90deg, var(--primary-dark), #0891B2);
  color: white;
  width: 100%;
}

.btn-gradient:hover {
  background: linear-gradient(90deg, #1D4ED8, #0E7490);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--primary-light);
  color: var(--primary-light);
}

.btn-outline:hover {
  background-color: var(--primary-light);
  color: white;
}

.btn-outline.cyan {
  border-color: var(--cyan);
  color: var(--cyan);
}

.btn-outline.cyan:hover {
  background-color: var(--cyan);
  color: white;
}

.btn-icon {
  background-color: transparent;
  color: var(--text-secondary);
  padding: var(--space-2);
  font-size: 1.25rem;
  line-height: 1;
}

.btn-icon:hover {
  color: var(--primary-light);
}

.btn-block {
  width: 100%;
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  font-size: 1.125rem;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  overflow: hidden;
  padding: var(--space-6);
  transition: transform var(--transition-normal) var(--easing-standard),
              border-color var(--transition-normal) var(--easing-standard);
}

.card.hoverable:hover {
  transform: scale(1.05);
  border-color: var(--primary-light);
}

.card.hoverable.cyan:hover {
  border-color: var(--cyan);
}

.card-title {
  color: var(--text-primary);
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.card-description {
  color: var(--text-tertiary);
  margin-bottom: var(--space-4);
}

/* Badges */
.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.badge-column {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.badge {
  display: inline-block;
  padding: 2px var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
}

.badge-blue { background-color: rgba(37, 99, 235, 0.2); color: var(--primary-light); }
.badge-cyan { background-color: rgba(8, 145, 178, 0.2); color: var(--cyan); }
.badge-teal { background-color: rgba(13, 148, 136, 0.2); color: var(--teal); }
.badge-purple { background-color: rgba(147, 51, 234, 0.2); color: var(--purple); }

.accent-blue { color: var(--primary-light); }
.accent-cyan { color: var(--cyan); }
.accent-teal { color: var(--teal); }
.accent-purple { color: var(--purple); }

/* Form Elements */
.form-group {
  margin-bottom: var(--space-6);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--input-background);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input::placeholder,
.form-textarea::placeholder {
  color: var(--text-tertiary);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.2);
  outline: none;
}

.form-textarea {
  min-height: 120px;
  resize: vertical;
}

/* Toasts */
.toast-host {
  position: fixed;
  bottom: var(--space-4);
  right: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  z-index: 100;
  max-width: 380px;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
  background-color: var(--slate-800);
  color: white;
  border: 1px solid var(--slate-600);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  padding: var(--space-4);
  animation: slide-up var(--transition-normal) var(--easing-standard);
}

:root.light .toast {
  background-color: #FFFFFF;
  color: var(--slate-900);
  border-color: var(--slate-200);
}

.toast-body {
  flex: 1;
}

.toast-title {
  font-weight: 600;
}

.toast-description {
  font-size: 0.875rem;
  opacity: 0.8;
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.grid-2,
.grid-3,
.grid-4 {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: 1fr;
}

@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, 1fr); }
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
  .grid-4 { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .grid-4 { grid-template-columns: repeat(4, 1fr); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-up {
  from { transform: translateY(20px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}
"#;
