// the dark palette is the default; toggling the theme adds the "light" class
// to the document root, which swaps the color block below
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;          /* Primary brand blue */
  --primary-light: #60A5FA;    /* Lighter blue for hover states */
  --primary-dark: #2563EB;     /* Darker blue for active states */
  --cyan: #22D3EE;
  --teal: #2DD4BF;
  --purple: #C084FC;

  /* Slate */
  --slate-50: #F8FAFC;
  --slate-100: #F1F5F9;
  --slate-200: #E2E8F0;
  --slate-300: #CBD5E1;
  --slate-400: #94A3B8;
  --slate-500: #64748B;
  --slate-600: #475569;
  --slate-700: #334155;
  --slate-800: #1E293B;
  --slate-900: #0F172A;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: linear-gradient(135deg, var(--slate-900), var(--slate-800), var(--slate-900));
  --surface: rgba(30, 41, 59, 0.5);
  --surface-raised: rgba(51, 65, 85, 0.5);
  --surface-band: rgba(30, 41, 59, 0.5);
  --nav-background: rgba(15, 23, 42, 0.95);
  --input-background: var(--slate-700);

  /* Text Colors */
  --text-primary: #FFFFFF;
  --text-secondary: var(--slate-300);
  --text-tertiary: var(--slate-400);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--slate-600);
  --border-subtle: var(--slate-700);

  /* Layout */
  --header-height: 64px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.3), 0 4px 6px -2px rgba(0, 0, 0, 0.2);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

:root.light {
  --background: linear-gradient(135deg, var(--slate-50), var(--slate-100), var(--slate-50));
  --surface: #FFFFFF;
  --surface-raised: var(--slate-50);
  --surface-band: rgba(226, 232, 240, 0.5);
  --nav-background: rgba(255, 255, 255, 0.95);
  --input-background: #FFFFFF;

  --text-primary: var(--slate-900);
  --text-secondary: var(--slate-700);
  --text-tertiary: var(--slate-500);

  --border: var(--slate-300);
  --border-subtle: var(--slate-200);

  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
}"#;
